extern crate clap;
use clap::*;

mod cmd_reseq;

fn main() -> anyhow::Result<()> {
    let app = Command::new("reseq")
        .version(crate_version!())
        .author(crate_authors!())
        .about("`reseq` - Reassemble DNA from overlapping FASTA segments")
        .propagate_version(true)
        .arg_required_else_help(true)
        .color(ColorChoice::Auto)
        .subcommand(cmd_reseq::assemble::make_subcommand())
        .subcommand(cmd_reseq::seeds::make_subcommand())
        .subcommand(cmd_reseq::overlap::make_subcommand())
        .after_help(
            r###"Subcommands:

* assemble - Rebuild one DNA sequence from all segments
* seeds    - List the overlapping segment pairs that start a chain
* overlap  - Test whether one segment extends another

"###,
        );

    // Check which subcomamnd the user ran...
    match app.get_matches().subcommand() {
        Some(("assemble", sub_matches)) => cmd_reseq::assemble::execute(sub_matches),
        Some(("seeds", sub_matches)) => cmd_reseq::seeds::execute(sub_matches),
        Some(("overlap", sub_matches)) => cmd_reseq::overlap::execute(sub_matches),
        _ => unreachable!(),
    }?;

    Ok(())
}
