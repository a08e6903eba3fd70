use anyhow::Context;

/// Reads the first record of a FASTA source as `(name, sequence)`.
///
/// The sequence is uppercased; anything after the first record is ignored.
/// `input` may be a file path, `stdin`, or a gzipped file.
pub fn read_one(input: &str) -> anyhow::Result<(String, String)> {
    let reader = crate::libs::io::reader(input);
    let mut fa_in = noodles_fasta::io::Reader::new(reader);

    let record = fa_in
        .records()
        .next()
        .with_context(|| format!("no FASTA record in {}", input))??;

    let name = String::from_utf8(record.name().into())?;
    let seq = record.sequence();
    let residues = String::from_utf8(seq.get(..).unwrap().to_ascii_uppercase())?;

    Ok((name, residues))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_one() -> anyhow::Result<()> {
        let (name, seq) = read_one("tests/nwa/test_seq1.fa")?;
        assert_eq!(name, "test_seq1");
        assert_eq!(seq, "MAVHQLIRRP");

        Ok(())
    }

    #[test]
    fn test_read_one_first_record_only() -> anyhow::Result<()> {
        // Lowercase residues in the file, a second record after it
        let (name, seq) = read_one("tests/nwa/two_records.fa")?;
        assert_eq!(name, "first");
        assert_eq!(seq, "MKVLLT");

        Ok(())
    }

    #[test]
    fn test_read_one_empty() {
        let err = read_one("tests/nwa/empty.fa").unwrap_err();
        assert!(err.to_string().contains("no FASTA record"));
    }
}
