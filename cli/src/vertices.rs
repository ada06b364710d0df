use crate::commands::{RadarCmd, VerticesCmd};
use crate::error::CliError;
use polyshape::geom::vertices::{regular_vertices_with_options, weighted_vertices, VertexOptions};
use polyshape::math::Point;
use std::io::{self, Write};

pub fn vertices(mut cmd: VerticesCmd) -> Result<(), CliError> {
    let options = VertexOptions::DEFAULT.with_truncated_radius(!cmd.exact);
    let points = regular_vertices_with_options(
        cmd.side_count,
        cmd.radius,
        cmd.corner_radius,
        &options,
    )?;

    write_points(&mut *cmd.output, &points, cmd.json)
}

pub fn radar(mut cmd: RadarCmd) -> Result<(), CliError> {
    let points = weighted_vertices(&cmd.dim_percentages, cmd.radius_max, cmd.side_count)?;

    write_points(&mut *cmd.output, &points, cmd.json)
}

fn write_points(output: &mut dyn io::Write, points: &[Point], json: bool) -> Result<(), CliError> {
    log::debug!("{} vertices", points.len());

    if json {
        serde_json::to_writer(&mut *output, points)?;
        writeln!(output)?;
        return Ok(());
    }

    for p in points {
        writeln!(output, "{} {}", p.x, p.y)?;
    }

    Ok(())
}
