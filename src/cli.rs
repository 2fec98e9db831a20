//! CLI: snapshot file → TypeScript declarations file
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};

use crate::ir::Layout;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// Generates TypeScript types from a Directus schema snapshot
#[derive(Parser, Debug)]
#[command(name = "directus-ts-schema", version)]
pub struct CommandLineInterface {
    /// path to Directus schema file (JSON or YAML)
    #[arg(value_name = "SCHEMA_FILE")]
    schema_file: PathBuf,

    /// path to output file
    #[arg(short, long, default_value = "schema.ts")]
    out_file: PathBuf,

    /// put collection types in a namespace
    #[arg(short = 'n', long, default_value_t = false)]
    use_namespace: bool,

    /// more log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }

    pub fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    pub fn run(&self) -> anyhow::Result<()> {
        // 1) load
        let snapshot = crate::snapshot::load_snapshot(&self.schema_file)?;

        // 2) lower to declarations
        let layout = Layout::from_use_namespace(self.use_namespace);
        let module = crate::lower::assemble(&snapshot, layout)?;

        // 3) render TypeScript
        let ts_src = crate::codegen::render(&module);

        // 4) write
        if let Some(parent) = self.out_file.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create output directory {}", parent.display())
            })?;
        }
        std::fs::write(&self.out_file, &ts_src)
            .with_context(|| format!("failed to write output file {}", self.out_file.display()))?;
        log::info!(
            "wrote {} ({} declarations, {layout:?})",
            self.out_file.display(),
            module.items.len(),
        );
        Ok(())
    }
}

// ————————————————————————————————————————————————————————————————————————————
// TESTS
// ————————————————————————————————————————————————————————————————————————————
