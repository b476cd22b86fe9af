use super::{ForcingRecordParser, ForcingTimeseries};
use crate::config::ModelParameters;
use crate::errors::{PetError, PetResult};
use crate::prescan::read_file_line_counts;
use crate::state::ForcingSnapshot;
use log::{debug, trace, warn};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Read a forcing file into a [`ForcingTimeseries`].
///
/// The file is scanned first to size the line buffer, then reopened and read
/// record by record. The header line is discarded and the next
/// `num_timesteps` lines are decoded with `parser`. Precipitation is converted
/// from a rate to the depth accumulated over one time step; all other values
/// are stored as parsed.
///
/// The number of data lines is not checked against `num_timesteps`. If the
/// file runs out early, the remaining steps repeat the last record read.
///
/// # Errors
///
/// - [`PetError::ForcingOpen`] if the file cannot be opened for the scan
/// - [`PetError::ForcingHeaderOnly`] if the file has no data lines
/// - [`PetError::ForcingDisappeared`] if the file cannot be reopened
/// - [`PetError::ForcingRead`] or [`PetError::ForcingParse`] for unreadable records
pub fn load_forcing(
    path: &Path,
    parameters: &ModelParameters,
    parser: &dyn ForcingRecordParser,
) -> PetResult<ForcingTimeseries> {
    let counts = read_file_line_counts(path).map_err(|source| PetError::ForcingOpen {
        path: path.to_path_buf(),
        source,
    })?;
    if counts.line_count <= 1 {
        return Err(PetError::ForcingHeaderOnly {
            path: path.to_path_buf(),
        });
    }

    let num_timesteps = parameters.num_timesteps;
    let time_step_size_s = parameters.time_step_size_s;
    if counts.line_count - 1 < num_timesteps {
        warn!(
            "Forcing file {} has {} data lines but {} time steps are configured",
            path.display(),
            counts.line_count - 1,
            num_timesteps
        );
    }
    debug!(
        "Reading {} time steps from {} (longest line {} bytes)",
        num_timesteps,
        path.display(),
        counts.max_line_length
    );

    let mut series = ForcingTimeseries::zeros(num_timesteps);

    let file = File::open(path).map_err(|source| PetError::ForcingDisappeared {
        path: path.to_path_buf(),
        source,
    })?;
    let mut reader = BufReader::new(file);
    let read_error = |source| PetError::ForcingRead {
        path: path.to_path_buf(),
        source,
    };

    let mut line = String::with_capacity(counts.max_line_length);
    reader.read_line(&mut line).map_err(read_error)?;

    let mut last: Option<ForcingSnapshot> = None;
    let mut exhausted = false;
    for i in 0..num_timesteps {
        line.clear();
        let forcing = if reader.read_line(&mut line).map_err(read_error)? == 0 {
            if !exhausted {
                exhausted = true;
                warn!(
                    "Forcing file {} ended after {} records, repeating the last record",
                    path.display(),
                    i
                );
            }
            match last {
                Some(forcing) => forcing,
                None => break,
            }
        } else {
            let mut forcing = parser.parse_line(&line, i + 2)?.forcing;
            forcing.precip_kg_per_m2 *= time_step_size_s;
            forcing
        };

        trace!("Forcing record {}: {:?}", i, forcing);
        series.set(i, &forcing);
        last = Some(forcing);
    }

    Ok(series)
}
