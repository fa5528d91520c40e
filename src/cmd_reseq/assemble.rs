use clap::*;
use reseq::libs::assemble::{read_fragments, write_contig, write_segment_list, Assembler, SEP};
use std::io::Write;

// Create clap subcommand arguments
pub fn make_subcommand() -> Command {
    Command::new("assemble")
        .about("Rebuilds one DNA sequence from overlapping FASTA segments")
        .after_help(
            r###"
This command chains every segment of a FASTA file into a single sequence.

Two segments are joined when a suffix of the first equals a prefix of the second
and the overlap covers more than half of the second segment. Matches must be exact.

Every overlapping pair is a possible starting point. Starting points are tried in
file order; from each one, the chain is greedily extended with the first segment
that fits. The first chain that uses every segment is written out.

Notes:
* Supports both plain text and gzipped (.gz) files
* Reads from stdin if input file is 'stdin'
* Segment names must be unique and must not contain ':'
* Exits with an error when no chain uses every segment

Examples:
1. Rebuild the sequence:
   reseq assemble segments.fa

2. Show the seed pairs tried and the order of the segments:
   reseq assemble segments.fa -v

3. Name the record and wrap the sequence at 60 bases:
   reseq assemble segments.fa --name chr1 --line 60 -o chr1.fa

"###,
        )
        .arg(
            Arg::new("infile")
                .required(true)
                .index(1)
                .help("Input FASTA file to process"),
        )
        .arg(
            Arg::new("name")
                .long("name")
                .num_args(1)
                .default_value("contig")
                .help("Name of the output record"),
        )
        .arg(
            Arg::new("line")
                .long("line")
                .num_args(1)
                .default_value("0")
                .value_parser(value_parser!(usize))
                .help("Sequence line length; 0 for a single line"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .action(ArgAction::SetTrue)
                .help("Print seed pairs, attempts and the segment order to stderr"),
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
    let outfile = args.get_one::<String>("outfile").unwrap();
    let name = args.get_one::<String>("name").unwrap();
    let line = *args.get_one::<usize>("line").unwrap();
    let verbose = args.get_flag("verbose");

    //----------------------------
    // Inputs
    //----------------------------
    let fragments = read_fragments(infile)?;
    if verbose {
        eprintln!("==> Inputs");
        eprintln!("    file    = {}", infile);
        eprintln!("    records = {}", fragments.len());
    }

    let assembler = Assembler::new(fragments)?;

    //----------------------------
    // Process
    //----------------------------
    let seeds = assembler.seeds();
    if verbose {
        eprintln!("==> Seed pairs");
        eprintln!("    count   = {}", seeds.len());
    }

    let segments = assembler.fragments();
    let assembly = assembler.assemble_from(seeds, |p, attempt| {
        if verbose {
            eprintln!(
                "    Building from seed pair ({}): {}{}{} {}",
                p,
                segments[attempt.seed.a].name,
                SEP,
                segments[attempt.seed.b].name,
                if attempt.succeeded { "..success!" } else { "fail." }
            );
        }
    })?;

    if verbose {
        eprintln!("==> Segments");
        write_segment_list(&mut std::io::stderr(), &assembly.segments())?;
    }

    //----------------------------
    // Output
    //----------------------------
    let mut writer = reseq::writer(outfile)?;
    write_contig(&mut writer, name, &assembly.contig.seq, line)?;
    writer.flush()?;

    Ok(())
}
