// Language-neutral declaration IR. No snapshot types here.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ty {
    Boolean,
    Number,
    String,
    Unknown,                 // top type
    Null,                    // the null literal type
    Reference(String),       // named type, e.g. `Date` or a generated record
    Union(Vec<Ty>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    pub name: String,
    pub ty: Ty,
}

/// Named record type. Members keep input order; duplicates are not merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Record(Declaration),
    Namespace { name: String, records: Vec<Declaration> },
}

/// Everything the serializer needs, in emission order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Module {
    pub items: Vec<Item>,
}

/// How per-collection records are arranged relative to the aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Layout {
    #[default]
    TopLevel,
    Namespace,
}

impl Ty {
    pub fn nullable(self) -> Ty {
        Ty::Union(vec![self, Ty::Null])
    }
}

impl Layout {
    pub fn from_use_namespace(use_namespace: bool) -> Self {
        if use_namespace { Layout::Namespace } else { Layout::TopLevel }
    }
}
