//! csrg reader and writer for [`PairTable`].

use tracing::debug;

use crate::base::{MappingError, Result, Symbol, SymbolKind};
use crate::table::PairTable;

use super::{ReadTable, WriteTable, is_skipped, push_row};

impl PairTable {
    /// Parse csrg text into a new table.
    pub fn parse(text: &str) -> Result<Self> {
        let mut table = PairTable::new();

        for (index, line) in text.lines().enumerate() {
            if is_skipped(line) {
                continue;
            }
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let (from, to) = match tokens.as_slice() {
                [original, renamed] => (Symbol::class(*original), Symbol::class(*renamed)),
                [owner, original, renamed] => (
                    Symbol::field(*owner, *original),
                    Symbol::field(*owner, *renamed),
                ),
                [owner, original, descriptor, renamed] => (
                    Symbol::method(*owner, *original, *descriptor),
                    Symbol::method(*owner, *renamed, *descriptor),
                ),
                other => {
                    return Err(MappingError::format(
                        index + 1,
                        format!("expected 2, 3 or 4 tokens, found {}", other.len()),
                    ));
                }
            };
            table.add(from, to);
        }

        debug!(entries = table.len(), "parsed csrg mappings");
        Ok(table)
    }
}

impl ReadTable for PairTable {
    fn load(&mut self, text: &str) -> Result<()> {
        *self = PairTable::parse(text)?;
        Ok(())
    }
}

impl WriteTable for PairTable {
    fn save(&self) -> Result<String> {
        let mut out = String::new();

        for (from, to) in self {
            match from.kind() {
                SymbolKind::Class => push_row(&mut out, ' ', &[from.name(), to.name()]),
                SymbolKind::Field => {
                    let owner = required_owner(from)?;
                    push_row(&mut out, ' ', &[owner, from.name(), to.name()]);
                }
                SymbolKind::Method => {
                    let owner = required_owner(from)?;
                    let descriptor = from.descriptor().ok_or_else(|| {
                        MappingError::Inconsistent(format!("{} has no descriptor", from))
                    })?;
                    push_row(&mut out, ' ', &[owner, from.name(), descriptor, to.name()]);
                }
            }
        }

        Ok(out)
    }
}

fn required_owner(symbol: &Symbol) -> Result<&str> {
    symbol.owner().ok_or_else(|| {
        MappingError::Inconsistent(format!("{} has no owner class", symbol))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
# spigot members
a Block
a b material
a c (La;I)V tick
";

    #[test]
    fn test_parse_all_entry_kinds() {
        let table = PairTable::parse(SAMPLE).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(
            table.get_renamed(&Symbol::class("a")),
            Some(&Symbol::class("Block"))
        );
        assert_eq!(
            table.get_renamed(&Symbol::field("a", "b")),
            Some(&Symbol::field("a", "material"))
        );
        assert_eq!(
            table.get_renamed(&Symbol::method("a", "c", "(La;I)V")),
            Some(&Symbol::method("a", "tick", "(La;I)V"))
        );
    }

    #[test]
    fn test_parse_rejects_bad_token_count() {
        let err = PairTable::parse("a b\na b c d e\n").unwrap_err();
        match err {
            MappingError::Format { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(PairTable::parse("lonely\n").is_err());
    }

    #[test]
    fn test_parse_skips_blank_lines() {
        let table = PairTable::parse("\na b\n\r\n").unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_save_uses_load_column_order() {
        let table = PairTable::parse(SAMPLE).unwrap();
        let text = table.save().unwrap();
        assert_eq!(text, "a Block\na b material\na c (La;I)V tick\n");
        assert_eq!(PairTable::parse(&text).unwrap(), table);
    }

    #[test]
    fn test_save_drops_field_descriptor() {
        let mut table = PairTable::new();
        table.add(
            Symbol::typed_field("a", "b", "I"),
            Symbol::typed_field("a", "count", "I"),
        );
        assert_eq!(table.save().unwrap(), "a b count\n");
    }

    #[test]
    fn test_save_member_without_owner_is_inconsistent() {
        let mut table = PairTable::new();
        let orphan = Symbol::new(SymbolKind::Field, "x", None, None);
        table.add(orphan.clone(), orphan);
        assert!(matches!(table.save(), Err(MappingError::Inconsistent(_))));
    }

    #[test]
    fn test_load_failure_keeps_contents() {
        let mut table = PairTable::parse("a b\n").unwrap();
        assert!(table.load("a b c d e\n").is_err());
        assert_eq!(table.len(), 1);
    }
}
