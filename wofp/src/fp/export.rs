use crate::error::Result;
use crate::fp::frequency::FrequencyTable;
use crate::fp::utils::AssociationRule;
use std::io::Write;

/// Writes rules as tab-separated `antecedent`, `consequent`, `weight` lines.
pub fn write_rules_tsv<W: Write>(rules: &[AssociationRule], mut writer: W) -> Result<()> {
    writeln!(writer, "antecedent\tconsequent\tweight")?;
    for rule in rules {
        writeln!(writer, "{}\t{}\t{:.2}", rule.item, rule.ancestor, rule.weight)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn write_frequency_table_tsv<W: Write>(table: &FrequencyTable, mut writer: W) -> Result<()> {
    writeln!(writer, "item\tsupport")?;
    for entry in table.items() {
        writeln!(writer, "{}\t{}", entry.item, entry.support)?;
    }
    writer.flush()?;
    Ok(())
}
