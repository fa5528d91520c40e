use clap::*;
use reseq::libs::assemble::{overlap_len, read_fragments, Assembler};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("seeds")
        .about("Lists the overlapping segment pairs that can start a chain")
        .after_help(
            r###"
This command tests every ordered pair of segments and reports those where the
second extends the first by an exact overlap covering more than half of it.

Output columns (tab-separated):
    index of base, index of extension (0-based, file order),
    name of base, name of extension, overlap length

Pairs are listed in the order `reseq assemble` tries them.

Examples:
1. List seed pairs:
   reseq seeds segments.fa

2. Save the output to a file:
   reseq seeds segments.fa -o seeds.tsv

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file to process"),
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
    let fragments = read_fragments(args.get_one::<String>("infile").unwrap())?;
    let assembler = Assembler::new(fragments)?;
    let fragments = assembler.fragments();

    let mut writer = reseq::writer(args.get_one::<String>("outfile").unwrap())?;

    for seed in assembler.seeds() {
        let base = &fragments[seed.a];
        let ext = &fragments[seed.b];
        let len = overlap_len(base, ext).unwrap_or_default();

        writer.write_fmt(format_args!(
            "{}\t{}\t{}\t{}\t{}\n",
            seed.a, seed.b, base.name, ext.name, len
        ))?;
    }
    writer.flush()?;

    Ok(())
}
