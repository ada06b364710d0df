use polyshape::path::{FillRule, RegularPolygon};
use polyshape::math::Point;
use std::io;

pub struct PathCmd {
    pub polygon: RegularPolygon,
    pub output: Box<dyn io::Write>,
    pub document: bool,
}

pub struct VerticesCmd {
    pub side_count: u32,
    pub radius: f32,
    pub corner_radius: f32,
    pub output: Box<dyn io::Write>,
    pub exact: bool,
    pub json: bool,
}

pub struct RadarCmd {
    pub dim_percentages: Vec<f32>,
    pub radius_max: f32,
    pub side_count: u32,
    pub output: Box<dyn io::Write>,
    pub json: bool,
}

pub struct HitCmd {
    pub polygon: RegularPolygon,
    pub point: Point,
    pub fill_rule: FillRule,
    pub tolerance: f32,
    pub output: Box<dyn io::Write>,
}
