//! # Ppm
//!
//! Renders a [`GraphStore`] as a binary `P6` portable pixmap: vertices are filled disks placed on
//! a near-square grid, edges are straight lines between the disk centers. Edge orientation is not
//! drawn.
//!
//! Besides the final image, [`PpmWriter::try_write_frames`] produces one frame per prefix of the
//! edge list, so that the sequence shows the graph being built edge by edge.
use std::{fs, path::PathBuf};

use tracing::debug;

use super::*;

/// An RGB color
pub type Rgb = [u8; 3];

const WHITE: Rgb = [255, 255, 255];
const BLACK: Rgb = [0, 0, 0];
const BLUE: Rgb = [0, 0, 255];

/// A raster image that clips everything drawn outside its bounds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Canvas {
    /// Creates a canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgb) -> Self {
        Self {
            width,
            height,
            pixels: vec![background; width as usize * height as usize],
        }
    }

    /// Returns the color at `(x, y)` or `None` if outside the canvas
    pub fn pixel(&self, x: i64, y: i64) -> Option<Rgb> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    fn index_of(&self, x: i64, y: i64) -> Option<usize> {
        let inside = (0..self.width as i64).contains(&x) && (0..self.height as i64).contains(&y);
        inside.then(|| y as usize * self.width as usize + x as usize)
    }

    /// Colors `(x, y)`; pixels outside the canvas are skipped
    pub fn plot(&mut self, x: i64, y: i64, color: Rgb) {
        if let Some(i) = self.index_of(x, y) {
            self.pixels[i] = color;
        }
    }

    /// Draws a line from `(x1, y1)` to `(x2, y2)` with Bresenham's algorithm.
    /// Both endpoints are always plotted (if inside the canvas).
    pub fn draw_line(&mut self, (x1, y1): (i64, i64), (x2, y2): (i64, i64), color: Rgb) {
        let dx = (x2 - x1).abs();
        let dy = (y2 - y1).abs();
        let sx = if x2 > x1 { 1 } else { -1 };
        let sy = if y2 > y1 { 1 } else { -1 };
        let (mut x, mut y) = (x1, y1);

        if dx > dy {
            let mut err = dx / 2;
            while x != x2 {
                self.plot(x, y, color);
                err -= dy;
                if err < 0 {
                    y += sy;
                    err += dx;
                }
                x += sx;
            }
        } else {
            let mut err = dy / 2;
            while y != y2 {
                self.plot(x, y, color);
                err -= dx;
                if err < 0 {
                    x += sx;
                    err += dy;
                }
                y += sy;
            }
        }

        self.plot(x2, y2, color);
    }

    /// Draws a filled disk centered at `(x0, y0)`
    pub fn draw_disk(&mut self, (x0, y0): (i64, i64), radius: i64, color: Rgb) {
        for y in y0 - radius..=y0 + radius {
            for x in x0 - radius..=x0 + radius {
                if (x - x0).pow(2) + (y - y0).pow(2) <= radius.pow(2) {
                    self.plot(x, y, color);
                }
            }
        }
    }

    /// Writes the canvas as binary `P6` pixmap
    pub fn try_write<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "P6\n{} {}\n255\n", self.width, self.height)?;
        writer.write_all(self.pixels.as_flattened())
    }
}

/// A writer for binary PPM images of a graph
#[derive(Debug, Clone)]
pub struct PpmWriter {
    width: u32,
    height: u32,
    radius: u32,
}

impl Default for PpmWriter {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            radius: 20,
        }
    }
}

impl PpmWriter {
    /// Shorthand for default: an `800 x 800` canvas with vertex radius `20`
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the canvas width
    pub fn width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    /// Sets the canvas height
    pub fn height(mut self, height: u32) -> Self {
        self.height = height;
        self
    }

    /// Sets the radius of the vertex disks
    pub fn radius(mut self, radius: u32) -> Self {
        self.radius = radius;
        self
    }

    /// Computes the center of every vertex. Vertices fill a grid with
    /// `floor(sqrt(n)) + 1` columns row by row; grid lines are evenly spaced with margins.
    pub fn layout(&self, n: NumNodes) -> Vec<(i64, i64)> {
        let cols = n.isqrt() + 1;
        let rows = n / cols + 1;
        let spacing_x = (self.width / (cols + 1)) as i64;
        let spacing_y = (self.height / (rows + 1)) as i64;

        (0..n)
            .map(|u| {
                let col = (u % cols + 1) as i64;
                let row = (u / cols + 1) as i64;
                (col * spacing_x, row * spacing_y)
            })
            .collect()
    }

    /// Returns the canvas with all vertices but no edges
    fn base_canvas(&self, positions: &[(i64, i64)]) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, WHITE);
        for &center in positions {
            canvas.draw_disk(center, self.radius as i64, BLUE);
        }
        canvas
    }

    fn draw_edge(canvas: &mut Canvas, positions: &[(i64, i64)], rec: &EdgeRecord) {
        canvas.draw_line(
            positions[rec.source() as usize],
            positions[rec.target() as usize],
            BLACK,
        );
    }

    /// Renders the full graph
    pub fn render(&self, graph: &GraphStore) -> Canvas {
        let positions = self.layout(graph.number_of_nodes());
        let mut canvas = self.base_canvas(&positions);
        for rec in graph.edge_list() {
            Self::draw_edge(&mut canvas, &positions, rec);
        }
        canvas
    }

    /// Writes `frame_{k}.ppm` into `dir` for every `k < m`, where frame `k` shows the first
    /// `k + 1` entries of the edge list, followed by the full graph as `final_name`.
    /// `dir` is created if necessary. Returns the paths of all written files in order.
    ///
    /// # Errors
    /// Returns an error if the directory or a file cannot be created or written.
    pub fn try_write_frames<P>(
        &self,
        graph: &GraphStore,
        dir: P,
        final_name: &str,
    ) -> Result<Vec<PathBuf>>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        fs::create_dir_all(dir)?;

        let positions = self.layout(graph.number_of_nodes());
        let mut canvas = self.base_canvas(&positions);
        let mut written = Vec::with_capacity(graph.edge_list().len() + 1);

        // lines are drawn over each other, so frame k is frame k - 1 plus one line
        for (k, rec) in graph.edge_list().iter().enumerate() {
            Self::draw_edge(&mut canvas, &positions, rec);
            let path = dir.join(format!("frame_{k}.ppm"));
            write_canvas_file(&canvas, &path)?;
            written.push(path);
        }

        let path = dir.join(final_name);
        write_canvas_file(&canvas, &path)?;
        written.push(path);

        debug!(frames = written.len(), dir = %dir.display(), "wrote ppm frames");
        Ok(written)
    }
}

fn write_canvas_file(canvas: &Canvas, path: &Path) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    canvas.try_write(&mut writer)?;
    writer.flush()
}

impl GraphWriter<GraphStore> for PpmWriter {
    fn try_write_graph<W>(&self, graph: &GraphStore, writer: W) -> Result<()>
    where
        W: Write,
    {
        self.render(graph).try_write(writer)
    }
}
