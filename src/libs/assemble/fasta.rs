use super::{Fragment, SEP};
use anyhow::Context;
use itertools::Itertools;
use std::io::{BufRead, Write};

/// Consumes whole lines until the next one starts a record.
fn skip_preamble(reader: &mut dyn BufRead) -> std::io::Result<()> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() || buf[0] == b'>' {
            return Ok(());
        }
        reader.read_until(b'\n', &mut vec![])?;
    }
}

/// Loads every record of a FASTA file, in file order.
///
/// `infile` may be `stdin` or a gzipped file. Anything before the first `>`,
/// such as `;` comment lines, is ignored.
pub fn read_fragments(infile: &str) -> anyhow::Result<Vec<Fragment>> {
    let mut reader = crate::reader(infile)?;
    skip_preamble(&mut reader)
        .with_context(|| format!("could not read FASTA records from {}", infile))?;
    let mut fa_in = noodles_fasta::io::Reader::new(reader);

    let mut fragments = vec![];
    for result in fa_in.records() {
        let record =
            result.with_context(|| format!("could not read FASTA records from {}", infile))?;
        let name = String::from_utf8(record.name().into())?;
        let seq = record.sequence().as_ref().to_vec();
        fragments.push(Fragment::new(name, seq));
    }

    Ok(fragments)
}

/// Writes one FASTA record. A `line_width` of 0 keeps the sequence on one line.
pub fn write_contig(
    writer: &mut dyn Write,
    name: &str,
    seq: &[u8],
    line_width: usize,
) -> anyhow::Result<()> {
    let width = if line_width == 0 { usize::MAX } else { line_width };
    let mut fa_out = noodles_fasta::io::writer::Builder::default()
        .set_line_base_count(width)
        .build_from_writer(writer);

    let definition = noodles_fasta::record::Definition::new(name.to_string(), None);
    let sequence = noodles_fasta::record::Sequence::from(seq.to_vec());
    fa_out.write_record(&noodles_fasta::Record::new(definition, sequence))?;

    Ok(())
}

/// Ordered listing of the segments of a contig, five per line.
///
/// ```
/// let mut out: Vec<u8> = vec![];
/// let names = ["r1", "r2", "r3", "r4", "r5", "r6"];
/// reseq::libs::assemble::write_segment_list(&mut out, &names).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.ends_with(":r1:r2:r3:r4:r5\n:r6\n"));
/// ```
pub fn write_segment_list(writer: &mut dyn Write, segments: &[&str]) -> anyhow::Result<()> {
    writer.write_all(b"Ordered listing of FASTA segments\n")?;
    writer.write_all(b"---------------------------------\n")?;

    for row in &segments.iter().chunks(5) {
        let line = row.map(|s| format!("{}{}", SEP, s)).join("");
        writer.write_fmt(format_args!("{}\n", line))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn reads_records_in_order() {
        let fragments = read_fragments("tests/assemble/three.fa").unwrap();
        assert_eq!(
            fragments,
            vec![
                Fragment::new("s1", "AAGCTTAG"),
                Fragment::new("s2", "CTTAGGC"),
                Fragment::new("s3", "AGGCCA"),
            ]
        );

        let gz = read_fragments("tests/assemble/three.fa.gz").unwrap();
        assert_eq!(gz, fragments);
    }

    #[test]
    fn joins_wrapped_lines_and_drops_descriptions() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("wrapped.fa");
        fs::write(&input, ">r1 first read\nACGT\nTTGA\n>r2\nCC\n").unwrap();

        let fragments = read_fragments(input.to_str().unwrap()).unwrap();
        assert_eq!(
            fragments,
            vec![Fragment::new("r1", "ACGTTTGA"), Fragment::new("r2", "CC")]
        );
    }

    #[test]
    fn skips_leading_comments() {
        let temp = TempDir::new().unwrap();
        let input = temp.path().join("comment.fa");
        fs::write(&input, ";comment\n\n; another one\n>s1\nAAGCTTAG\n>s2\nCTTAGGC\n").unwrap();

        let fragments = read_fragments(input.to_str().unwrap()).unwrap();
        assert_eq!(
            fragments,
            vec![Fragment::new("s1", "AAGCTTAG"), Fragment::new("s2", "CTTAGGC")]
        );

        let empty = temp.path().join("empty.fa");
        fs::write(&empty, ";nothing here\n").unwrap();
        assert!(read_fragments(empty.to_str().unwrap()).unwrap().is_empty());
    }

    #[test]
    fn missing_file() {
        let err = read_fragments("tests/assemble/missing.fa").unwrap_err();
        assert!(err.to_string().contains("could not open"));
    }

    #[test]
    fn contig_line_width() {
        let mut out: Vec<u8> = vec![];
        write_contig(&mut out, "contig", b"ACGTACGTAC", 4).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">contig\nACGT\nACGT\nAC\n");

        let mut out: Vec<u8> = vec![];
        write_contig(&mut out, "contig", b"ACGTACGTAC", 0).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">contig\nACGTACGTAC\n");
    }

    #[test]
    fn segment_list_header() {
        let mut out: Vec<u8> = vec![];
        write_segment_list(&mut out, &["A", "C", "B"]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Ordered listing of FASTA segments\n---------------------------------\n:A:C:B\n"
        );
    }
}
