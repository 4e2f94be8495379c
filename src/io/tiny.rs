//! tiny v1 reader and writer for [`NamespaceTable`].
//!
//! Column layout (one canonical ordering):
//!
//! ```text
//! v1      <root>   <ns1>        <ns2> ...
//! CLASS   <root name>           <ns1 name> ...
//! FIELD   <owner>  <descriptor> <root name> <ns1 name> ...
//! METHOD  <owner>  <descriptor> <root name> <ns1 name> ...
//! ```
//!
//! Owners and descriptors are always written in root naming. An empty
//! descriptor column stands for a symbol without descriptor.

use rayon::prelude::*;
use smol_str::SmolStr;
use tracing::{debug, warn};

use crate::base::{MappingError, Result, Symbol, SymbolKind};
use crate::table::NamespaceTable;

use super::{ReadTable, WriteTable, is_skipped, push_row};

const HEADER_TAG: &str = "v1";

/// What to do when a namespace has no entry for a root symbol at save time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingEntryPolicy {
    /// Abort the save with [`MappingError::MissingMapping`].
    #[default]
    Fail,
    /// Leave the symbol's row out of the output and log a warning.
    Skip,
}

/// Options for [`NamespaceTable::save_with`].
#[derive(Clone, Debug, Default)]
pub struct SaveOptions {
    pub missing: MissingEntryPolicy,
}

impl SaveOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the policy for incomplete namespaces.
    pub fn with_missing(mut self, policy: MissingEntryPolicy) -> Self {
        self.missing = policy;
        self
    }
}

impl NamespaceTable {
    /// Parse tiny v1 text into a new table.
    pub fn parse(text: &str) -> Result<Self> {
        let mut lines = text
            .lines()
            .enumerate()
            .map(|(index, line)| (index + 1, line))
            .filter(|(_, line)| !is_skipped(line));

        let Some((header_line, header)) = lines.next() else {
            return Err(MappingError::format(1, "missing tiny header"));
        };
        let names = header
            .strip_prefix(HEADER_TAG)
            .and_then(|rest| rest.strip_prefix('\t'))
            .ok_or_else(|| {
                MappingError::format(header_line, format!("unsupported header: '{}'", header))
            })?;
        let names: Vec<&str> = names.trim().split('\t').collect();
        let Some((root, namespaces)) = names.split_first().filter(|(root, _)| !root.is_empty())
        else {
            return Err(MappingError::format(
                header_line,
                "header names no root namespace",
            ));
        };

        let mut table = NamespaceTable::new(*root);
        for namespace in namespaces {
            table
                .add_namespace(namespace)
                .map_err(|e| MappingError::format(header_line, e.to_string()))?;
        }

        for (line_no, line) in lines {
            let columns: Vec<&str> = line.split('\t').collect();
            let kind = SymbolKind::from_tag(columns[0]).ok_or_else(|| {
                MappingError::format(line_no, format!("unknown entry kind '{}'", columns[0]))
            })?;
            let first_name = if kind == SymbolKind::Class { 1 } else { 3 };
            let required = first_name + 1 + namespaces.len();
            if columns.len() < required {
                return Err(MappingError::format(
                    line_no,
                    format!(
                        "expected at least {} columns, found {}",
                        required,
                        columns.len()
                    ),
                ));
            }

            let original = match kind {
                SymbolKind::Class => Symbol::class(columns[1]),
                _ => Symbol::new(
                    kind,
                    columns[3],
                    Some(SmolStr::new(columns[1])),
                    Some(columns[2]).filter(|d| !d.is_empty()).map(SmolStr::new),
                ),
            };

            table.add_root_symbol(original.clone());
            for (namespace, name) in namespaces.iter().zip(&columns[first_name + 1..]) {
                table.add_mapping(namespace, original.clone(), original.renamed(*name))?;
            }
        }

        debug!(
            root = table.root_namespace_name(),
            namespaces = namespaces.len(),
            symbols = table.len(),
            "parsed tiny mappings"
        );
        Ok(table)
    }

    /// Serialize to tiny v1 text.
    pub fn save_with(&self, options: &SaveOptions) -> Result<String> {
        let namespaces: Vec<&str> = self.namespace_names().collect();

        let mut out = String::new();
        let mut header = vec![HEADER_TAG, self.root_namespace_name()];
        header.extend(namespaces.iter().copied());
        push_row(&mut out, '\t', &header);

        let roots: Vec<&Symbol> = self.root_symbols().collect();
        let rows = roots
            .par_iter()
            .map(|symbol| {
                self.render_row(symbol, &namespaces, options.missing)
            })
            .collect::<Result<Vec<Option<String>>>>()?;

        let skipped = rows.iter().filter(|row| row.is_none()).count();
        if skipped > 0 {
            warn!(skipped, "left out rows with missing namespace entries");
        }
        for row in rows.into_iter().flatten() {
            out.push_str(&row);
        }
        Ok(out)
    }

    fn render_row(
        &self,
        symbol: &Symbol,
        namespaces: &[&str],
        missing: MissingEntryPolicy,
    ) -> Result<Option<String>> {
        let mut columns: Vec<SmolStr> = Vec::with_capacity(namespaces.len() + 4);
        columns.push(SmolStr::new_static(symbol.kind().tag()));
        if symbol.kind().is_member() {
            let owner = symbol.owner().ok_or_else(|| {
                MappingError::Inconsistent(format!("{} has no owner class", symbol))
            })?;
            columns.push(SmolStr::new(owner));
            columns.push(SmolStr::new(symbol.descriptor().unwrap_or("")));
        }
        columns.push(SmolStr::new(symbol.name()));

        for namespace in namespaces {
            match self.get_renamed(namespace, symbol)? {
                Some(renamed) => columns.push(SmolStr::new(renamed.name())),
                None if missing == MissingEntryPolicy::Skip => {
                    warn!(%symbol, namespace, "missing namespace entry, skipping row");
                    return Ok(None);
                }
                None => {
                    return Err(MappingError::MissingMapping {
                        namespace: (*namespace).into(),
                        symbol: symbol.clone(),
                    });
                }
            }
        }

        let columns: Vec<&str> = columns.iter().map(SmolStr::as_str).collect();
        let mut row = String::new();
        push_row(&mut row, '\t', &columns);
        Ok(Some(row))
    }
}

impl ReadTable for NamespaceTable {
    fn load(&mut self, text: &str) -> Result<()> {
        *self = NamespaceTable::parse(text)?;
        Ok(())
    }
}

impl WriteTable for NamespaceTable {
    fn save(&self) -> Result<String> {
        self.save_with(&SaveOptions::default())
    }
}
