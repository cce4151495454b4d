use crate::CLAP_STYLING;
use clap::arg;
use linksort_core::config::DEFAULT_CONFIG_FILE;

pub(crate) fn command_argument_builder() -> clap::Command {
    clap::Command::new("linksort")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("linksort")
        .styles(CLAP_STYLING)
        .about(
            "Extracts URLs from the files in the input directory and sorts them into \
        per-domain JSON buckets in the output directory.",
        )
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .arg(
            arg!(-c --"config" <PATH>)
                .required(false)
                .help("Path to the JSON configuration file")
                .value_parser(clap::value_parser!(std::path::PathBuf))
                .default_value(DEFAULT_CONFIG_FILE),
        )
        .arg(
            arg!([COMMAND])
                .required(false)
                .help(
                    "'clean' removes the output directory, 'cleanall' removes the input and \
                output directories. Anything else, or nothing, sorts the input.",
                ),
        )
}
