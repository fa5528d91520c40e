use clap::*;
use reseq::libs::assemble::{overlap, read_fragments, write_contig, Assembler};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("overlap")
        .about("Tests whether one segment extends another")
        .after_help(
            r###"
This command looks up two records by name and splices <ext> onto the end of <base>
if a suffix of <base> equals a prefix of <ext> covering more than half of <ext>.

The merged record is written in FASTA format, named <base>:<ext>.
Nothing is written when the segments do not overlap.

Examples:
1. Test a pair:
   reseq overlap segments.fa s1 s2

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file to process"),
        )
        .arg(
            Arg::new("base")
                .required(true)
                .index(2)
                .help("Name of the segment to extend"),
        )
        .arg(
            Arg::new("ext")
                .required(true)
                .index(3)
                .help("Name of the extending segment"),
        )
        .arg(
            Arg::new("outfile")
                .long("outfile")
                .short('o')
                .num_args(1)
                .default_value("stdout")
                .help("Output filename. [stdout] for screen"),
        )
}

// command implementation
pub fn execute(args: &ArgMatches) -> anyhow::Result<()> {
    //----------------------------
    // Args
    //----------------------------
    let infile = args.get_one::<String>("infile").unwrap();
    let base_name = args.get_one::<String>("base").unwrap();
    let ext_name = args.get_one::<String>("ext").unwrap();

    let assembler = Assembler::new(read_fragments(infile)?)?;
    let find = |name: &str| {
        assembler
            .fragments()
            .iter()
            .find(|f| f.name == name)
            .ok_or_else(|| anyhow::anyhow!("{} not found in {}", name, infile))
    };
    let base = find(base_name.as_str())?;
    let ext = find(ext_name.as_str())?;

    //----------------------------
    // Output
    //----------------------------
    let mut writer = reseq::writer(args.get_one::<String>("outfile").unwrap())?;
    if let Some(merged) = overlap(base, ext) {
        write_contig(&mut writer, &merged.name, &merged.seq, 0)?;
    }
    writer.flush()?;

    Ok(())
}
