//! TypeScript emission for the declaration IR.
use once_cell::sync::Lazy;
use regex::Regex;

use crate::ir::{Declaration, Item, Module, Ty};

const INDENT: &str = "    ";

static IDENTIFIER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z_$][A-Za-z0-9_$]*$").expect("identifier regex"));

pub struct Codegen {
    out: String,
    depth: usize,
}

impl Codegen {
    pub fn new() -> Self {
        Self { out: String::new(), depth: 0 }
    }

    pub fn emit(&mut self, module: &Module) {
        for item in &module.items {
            match item {
                Item::Record(decl) => self.emit_record(decl),
                Item::Namespace { name, records } => {
                    self.line(&format!("export namespace {name} {{"));
                    self.depth += 1;
                    for decl in records {
                        self.emit_record(decl);
                    }
                    self.depth -= 1;
                    self.line("}");
                }
            }
        }
    }

    pub fn into_string(self) -> String {
        self.out
    }

    fn emit_record(&mut self, decl: &Declaration) {
        if decl.members.is_empty() {
            self.line(&format!("export type {} = {{}};", decl.name));
            return;
        }
        self.line(&format!("export type {} = {{", decl.name));
        self.depth += 1;
        for member in &decl.members {
            self.line(&format!("{}: {};", property_name(&member.name), render_ty(&member.ty)));
        }
        self.depth -= 1;
        self.line("};");
    }

    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }
}

impl Default for Codegen {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a whole module in one call.
pub fn render(module: &Module) -> String {
    let mut cg = Codegen::new();
    cg.emit(module);
    cg.into_string()
}

pub fn render_ty(ty: &Ty) -> String {
    match ty {
        Ty::Boolean => "boolean".to_string(),
        Ty::Number => "number".to_string(),
        Ty::String => "string".to_string(),
        Ty::Unknown => "unknown".to_string(),
        Ty::Null => "null".to_string(),
        Ty::Reference(name) => name.clone(),
        Ty::Union(arms) => arms.iter().map(render_ty).collect::<Vec<_>>().join(" | "),
    }
}

// Names that are not plain identifiers are quoted so the output still parses.
fn property_name(name: &str) -> String {
    if IDENTIFIER.is_match(name) {
        name.to_string()
    } else {
        serde_json::Value::from(name).to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Layout, Member};
    use crate::lower::assemble;
    use crate::snapshot::Snapshot;
    use serde_json::json;

    fn posts_and_authors() -> Snapshot {
        serde_json::from_value(json!({
            "collections": [{ "collection": "posts" }, { "collection": "authors" }],
            "fields": [
                { "collection": "posts", "field": "id", "type": "integer" },
                { "collection": "posts", "field": "title", "type": "string" },
                { "collection": "authors", "field": "name", "type": "string", "schema": { "is_nullable": true } }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn renders_top_level_records() {
        let module = assemble(&posts_and_authors(), Layout::TopLevel).unwrap();
        let expected = "\
export type Posts = {
    id: number;
    title: string;
};
export type Authors = {
    name: string | null;
};
export type Schema = {
    posts: Posts;
    authors: Authors;
};
";
        assert_eq!(render(&module), expected);
    }

    #[test]
    fn renders_namespaced_records() {
        let module = assemble(&posts_and_authors(), Layout::Namespace).unwrap();
        let expected = "\
export namespace Schema {
    export type Posts = {
        id: number;
        title: string;
    };
    export type Authors = {
        name: string | null;
    };
}
export type Schema = {
    posts: Posts;
    authors: Authors;
};
";
        assert_eq!(render(&module), expected);
    }

    #[test]
    fn rendering_is_repeatable() {
        let input = posts_and_authors();
        let first = render(&assemble(&input, Layout::Namespace).unwrap());
        let second = render(&assemble(&input, Layout::Namespace).unwrap());
        assert_eq!(first, second);
    }

    #[test]
    fn renders_every_type_form() {
        assert_eq!(render_ty(&Ty::Boolean), "boolean");
        assert_eq!(render_ty(&Ty::Unknown.nullable()), "unknown | null");
        assert_eq!(render_ty(&Ty::Reference("Date".into()).nullable()), "Date | null");
    }

    #[test]
    fn empty_records_render_inline() {
        let module = Module {
            items: vec![
                Item::Namespace { name: "Schema".into(), records: vec![] },
                Item::Record(Declaration { name: "Schema".into(), members: vec![] }),
            ],
        };
        assert_eq!(render(&module), "export namespace Schema {\n}\nexport type Schema = {};\n");
    }

    #[test]
    fn non_identifier_properties_are_quoted() {
        let decl = Declaration {
            name: "Weird".into(),
            members: ["ok_name", "$ref", "kebab-case", "2fa", "with \"quote\""]
                .into_iter()
                .map(|name| Member { name: name.into(), ty: Ty::String })
                .collect(),
        };
        let module = Module { items: vec![Item::Record(decl)] };
        let expected = "\
export type Weird = {
    ok_name: string;
    $ref: string;
    \"kebab-case\": string;
    \"2fa\": string;
    \"with \\\"quote\\\"\": string;
};
";
        assert_eq!(render(&module), expected);
    }
}
