use structopt::StructOpt;
use vgpost::base::AnalysisInput;
use vgpost::correlation::{find_failure_steps, FailureReport};
use vgpost::vgi::calc_monotonic_vgi;
use vgpost::StrError;

/// Command line options
#[derive(StructOpt, Debug)]
#[structopt(
    name = "vgpost_report",
    about = "Computes the monotonic VGI history and correlates observed failure points"
)]
struct Options {
    /// Path to the analysis input JSON file (configuration, field histories, load series)
    input: String,

    /// Path to the failure report JSON file to be written
    output: String,
}

fn main() -> Result<(), StrError> {
    // parse options
    let options = Options::from_args();

    // load data
    let input = AnalysisInput::read_json(&options.input)?;
    let fields = &input.fields;

    // compute the VGI history
    let vgi = calc_monotonic_vgi(&fields.mises, &fields.pressure, &fields.peeq)?;

    // correlate the observed failure values
    let load = input.load_history();
    load.check_alignment(fields.nstep())?;
    let matches = find_failure_steps(
        &load,
        &input.config.failure_observations,
        input.config.effective_tolerance(),
    )?;

    // write the report
    let report = FailureReport::new(&vgi, &matches)?;
    report.write_json(&options.output)?;

    // message
    for m in report.unmatched() {
        println!(
            "WARNING: no step within tolerance for the failure observation {} (best relative error = {} %)",
            m.observation, m.relative_error
        );
    }
    println!(
        "{} specimen: {} of {} failure observation(s) correlated",
        input.config.specimen,
        report.matches.len() - report.unmatched().len(),
        report.matches.len()
    );
    println!("results written to {}", options.output);
    Ok(())
}
