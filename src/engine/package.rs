//! Package moves applied to member owners.

use smol_str::SmolStr;
use tracing::{debug, info};

use crate::base::{Result, Symbol, SymbolKind};
use crate::table::{NamespaceTable, PairTable};

use super::{Rebuilt, insert_namespace, map_entries};

/// Package name standing for "classes without a package".
pub const PACKAGELESS: &str = "./";

/// Rewrite the owners of every namespace's renamed members.
///
/// `packages` is read as a list of class-to-class pairs, applied in order:
/// - `./ com/x` prefixes every owner with `com/x/`
/// - any other `from to` replaces every occurrence of `from` in the owner
///
/// Non-class pairs are ignored. Keys and entries without an owner are kept.
pub fn apply_package_mapping(tiny: &mut NamespaceTable, packages: &PairTable) -> Result<()> {
    let moves: Vec<(&str, &str)> = packages
        .iter()
        .filter(|(from, to)| {
            from.kind() == SymbolKind::Class && to.kind() == SymbolKind::Class
        })
        .map(|(from, to)| (from.name(), to.name()))
        .collect();
    if moves.is_empty() {
        debug!("no class pairs in package mapping");
        return Ok(());
    }

    let snapshot = tiny.all_namespaces();
    let rebuilt: Vec<Rebuilt> = snapshot
        .iter()
        .map(|(name, entries)| {
            let entries = map_entries(entries, |original, renamed| {
                (original.clone(), move_owner(renamed, &moves))
            });
            (name.clone(), entries)
        })
        .collect();

    for (name, entries) in rebuilt {
        tiny.remove_namespace(&name)?;
        insert_namespace(tiny, &name, entries)?;
    }

    info!(
        packages = moves.len(),
        namespaces = snapshot.len(),
        "applied package mapping"
    );
    Ok(())
}

fn move_owner(symbol: &Symbol, moves: &[(&str, &str)]) -> Symbol {
    let Some(owner) = symbol.owner() else {
        return symbol.clone();
    };

    let mut owner = owner.to_string();
    for &(from, to) in moves {
        if from == PACKAGELESS {
            owner = format!("{}/{}", to.trim_end_matches('/'), owner);
        } else {
            owner = owner.replace(from, to);
        }
    }
    symbol.with_references(
        Some(SmolStr::from(owner)),
        symbol.descriptor().map(SmolStr::new),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NamespaceTable {
        let mut tiny = NamespaceTable::new("official");
        tiny.add_namespace("spigot").unwrap();
        tiny.add_mapping("spigot", Symbol::class("a"), Symbol::class("Foo"))
            .unwrap();
        tiny.add_mapping(
            "spigot",
            Symbol::field("a", "b"),
            Symbol::field("Foo", "count"),
        )
        .unwrap();
        tiny.add_mapping(
            "spigot",
            Symbol::method("a", "c", "()V"),
            Symbol::method("me/old/Bar", "run", "()V"),
        )
        .unwrap();
        tiny
    }

    fn packages(pairs: &[(&str, &str)]) -> PairTable {
        pairs
            .iter()
            .map(|(from, to)| (Symbol::class(*from), Symbol::class(*to)))
            .collect()
    }

    #[test]
    fn test_packageless_owner_gets_prefix() {
        let mut tiny = sample();
        apply_package_mapping(&mut tiny, &packages(&[("./", "com/x")])).unwrap();

        let field = tiny
            .get_renamed("spigot", &Symbol::field("a", "b"))
            .unwrap()
            .unwrap();
        assert_eq!(field.owner(), Some("com/x/Foo"));
    }

    #[test]
    fn test_packageless_prefixes_owner_with_package() {
        let mut tiny = sample();
        apply_package_mapping(&mut tiny, &packages(&[("./", "com/x")])).unwrap();

        let method = tiny
            .get_renamed("spigot", &Symbol::method("a", "c", "()V"))
            .unwrap()
            .unwrap();
        assert_eq!(method.owner(), Some("com/x/me/old/Bar"));
    }

    #[test]
    fn test_packageless_target_with_trailing_slash() {
        let mut tiny = sample();
        apply_package_mapping(&mut tiny, &packages(&[("./", "net/minecraft/server/")])).unwrap();

        let field = tiny
            .get_renamed("spigot", &Symbol::field("a", "b"))
            .unwrap()
            .unwrap();
        assert_eq!(field.owner(), Some("net/minecraft/server/Foo"));
    }

    #[test]
    fn test_package_substring_replaced() {
        let mut tiny = sample();
        apply_package_mapping(&mut tiny, &packages(&[("me/old/", "io/new/")])).unwrap();

        let method = tiny
            .get_renamed("spigot", &Symbol::method("a", "c", "()V"))
            .unwrap()
            .unwrap();
        assert_eq!(method.owner(), Some("io/new/Bar"));
        assert_eq!(method.name(), "run");
    }

    #[test]
    fn test_classes_and_non_class_pairs_untouched() {
        let mut tiny = sample();
        let mut table = packages(&[]);
        table.add(Symbol::field("Foo", "x"), Symbol::field("Foo", "y"));

        apply_package_mapping(&mut tiny, &table).unwrap();
        apply_package_mapping(&mut tiny, &packages(&[("./", "com/x")])).unwrap();

        assert_eq!(
            tiny.get_renamed("spigot", &Symbol::class("a")).unwrap(),
            Some(Symbol::class("Foo"))
        );
        assert_eq!(tiny.namespace_len("spigot").unwrap(), 3);
    }
}
