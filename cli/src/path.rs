use crate::commands::PathCmd;
use crate::error::CliError;
use polyshape::algorithms::aabb::bounding_box;
use polyshape::path::{construct_polygon_path, Path};
use std::io::Write;

// Space around the shape in the viewBox of generated documents.
const DOCUMENT_MARGIN: f32 = 1.0;

pub fn path(mut cmd: PathCmd) -> Result<(), CliError> {
    let mut path = Path::new();
    let kind = construct_polygon_path(&mut path, &cmd.polygon)?;
    log::debug!("{:?} -> {:?}", cmd.polygon, kind);

    let data = path.to_svg_path_data();

    if !cmd.document {
        writeln!(&mut *cmd.output, "{}", data)?;
        return Ok(());
    }

    let bounds = bounding_box(&path).inflate(DOCUMENT_MARGIN, DOCUMENT_MARGIN);
    let size = bounds.size();
    writeln!(
        &mut *cmd.output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">",
        bounds.min.x, bounds.min.y, size.width, size.height
    )?;
    writeln!(&mut *cmd.output, "  <path d=\"{}\"/>", data)?;
    writeln!(&mut *cmd.output, "</svg>")?;

    Ok(())
}
