use crate::commands::HitCmd;
use crate::error::CliError;
use polyshape::algorithms::hit_test::hit_test_polygon;
use std::io::Write;

pub fn hit(mut cmd: HitCmd) -> Result<(), CliError> {
    let inside = hit_test_polygon(&cmd.point, &cmd.polygon, cmd.fill_rule, cmd.tolerance)?;

    writeln!(&mut *cmd.output, "{}", if inside { "inside" } else { "outside" })?;

    Ok(())
}
