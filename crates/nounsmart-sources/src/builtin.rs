//! Small sample table compiled into the binary, for offline practice.

use async_trait::async_trait;

use nounsmart_core::table::NounTable;
use nounsmart_core::traits::NounSource;

use crate::error::SourceError;

const BUILTIN_CSV: &str = include_str!("../data/nouns.csv");

pub struct BuiltinSource;

#[async_trait]
impl NounSource for BuiltinSource {
    fn name(&self) -> &str {
        "builtin"
    }

    fn location(&self) -> String {
        "builtin sample".into()
    }

    async fn load(&self) -> anyhow::Result<NounTable> {
        Ok(NounTable::from_csv_str(BUILTIN_CSV).map_err(SourceError::from)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nounsmart_core::table::validate_table;
    use nounsmart_core::Level;

    #[tokio::test]
    async fn sample_covers_every_level_cleanly() {
        let table = BuiltinSource.load().await.unwrap();
        for level in Level::ALL {
            assert_eq!(table.count(level), 20, "level {level}");
        }
        assert!(validate_table(&table).is_empty());
    }
}
