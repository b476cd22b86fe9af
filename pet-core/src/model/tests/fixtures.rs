use std::fs;
use std::path::{Path, PathBuf};

/// 2015-12-01T00:00:00Z
pub(super) const FIRST_RECORD_TIME: f64 = 1_448_928_000.0;

pub(super) const FORCING: &str = "\
time,APCP_surface,DLWRF_surface,DSWRF_surface,PRES_surface,SPFH_2maboveground,TMP_2maboveground,UGRD_10maboveground,VGRD_10maboveground
2015-12-01 00:00:00,0.001,300.0,0.0,101000.0,0.005,280.0,1.0,-1.0
2015-12-01 01:00:00,0.002,301.0,10.0,101100.0,0.006,281.0,2.0,-2.0
2015-12-01 02:00:00,0.003,302.0,20.0,101200.0,0.007,282.0,3.0,-3.0
";

pub(super) fn write_forcing(dir: &Path) -> PathBuf {
    let path = dir.join("forcing.csv");
    fs::write(&path, FORCING).unwrap();
    path
}

/// Write a configuration file using `forcing_file` as the forcing source.
pub(super) fn write_config(dir: &Path, forcing_file: &str, num_timesteps: usize) -> PathBuf {
    let path = dir.join("config.txt");
    let text = format!(
        "verbose=0\n\
         pet_method=5\n\
         forcing_file={}\n\
         run_unit_tests=0\n\
         yes_aorc=1\n\
         wind_speed_measurement_height_m=10.0\n\
         humidity_measurement_height_m=2.0\n\
         vegetation_height_m=0.12\n\
         zero_plane_displacement_height_m=0.0003\n\
         momentum_transfer_roughness_length_m=0.0\n\
         surface_longwave_emissivity=1.0\n\
         surface_shortwave_albedo=0.22\n\
         latitude_degrees=37.25\n\
         longitude_degrees=-97.5554\n\
         site_elevation_m=303.33\n\
         time_step_size_s=3600\n\
         num_timesteps={}\n\
         shortwave_radiation_provided=0\n",
        forcing_file, num_timesteps
    );
    fs::write(&path, text).unwrap();
    path
}

/// Write a forcing file and a configuration that reads it.
pub(super) fn write_file_forced(dir: &Path, num_timesteps: usize) -> PathBuf {
    let forcing = write_forcing(dir);
    write_config(dir, &forcing.display().to_string(), num_timesteps)
}
