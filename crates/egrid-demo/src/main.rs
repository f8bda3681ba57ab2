// ABOUTME: Demo binary for the even-grid arranger.
// ABOUTME: Composes a sample grid and prints the resolved cells as ASCII.

use anyhow::{Context, Result};
use egrid_core::{GridConfig, Rect, Size};
use egrid_layout::{resolve, Element, GridView, TreeCompositor};

fn parse<T: std::str::FromStr>(args: &[String], index: usize, name: &str, default: T) -> Result<T>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match args.get(index) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("invalid {name} '{raw}'")),
        None => Ok(default),
    }
}

/// Draw cell outlines onto a character canvas sized to the container.
///
/// Cells with non-finite or sub-character geometry are skipped rather than
/// drawn wrapped; the arranger hands them through unchanged and only the
/// rendering here needs sane coordinates.
fn render_ascii(cells: &[(Rect, &usize)], container: Size) -> String {
    let cols = container.width.max(0.0) as usize;
    let rows = container.height.max(0.0) as usize;
    if cols == 0 || rows == 0 {
        return String::new();
    }
    let mut canvas = vec![vec![' '; cols]; rows];

    for (rect, index) in cells {
        if !rect.width.is_finite() || !rect.height.is_finite() {
            continue;
        }
        if rect.width < 1.0 || rect.height < 1.0 {
            continue;
        }
        let left = rect.x.max(0.0).round() as usize;
        let top = rect.y.max(0.0).round() as usize;
        if left >= cols || top >= rows {
            continue;
        }
        let right = ((rect.x + rect.width - 1.0).round().max(0.0) as usize)
            .min(cols - 1)
            .max(left);
        let bottom = ((rect.y + rect.height - 1.0).round().max(0.0) as usize)
            .min(rows - 1)
            .max(top);

        for col in left..=right {
            canvas[top][col] = '-';
            canvas[bottom][col] = '-';
        }
        for row in canvas.iter_mut().take(bottom + 1).skip(top) {
            row[left] = '|';
            row[right] = '|';
        }
        canvas[top][left] = '+';
        canvas[top][right] = '+';
        canvas[bottom][left] = '+';
        canvas[bottom][right] = '+';

        if bottom > top + 1 && right > left + 1 {
            for (offset, ch) in index.to_string().chars().enumerate() {
                let col = left + 1 + offset;
                if col < right {
                    canvas[top + 1][col] = ch;
                }
            }
        }
    }

    let mut out = String::new();
    for row in &canvas {
        out.extend(row.iter());
        out.push('\n');
    }
    out
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let width = parse(&args, 0, "width", 80.0_f32)?;
    let height = parse(&args, 1, "height", 24.0_f32)?;
    let items = parse(&args, 2, "item count", 10_usize)?;
    let columns = parse(&args, 3, "column count", 4_usize)?;

    tracing::info!(items, columns, "Starting even-grid demo");

    let container = Size::new(width, height);
    let config = GridConfig::new(columns).column_spacing(1.0).row_spacing(1.0);
    let grid = GridView::from_range(config, 0..items, Element::Leaf);
    let root = grid.compose(&mut TreeCompositor::new(), container);
    let cells = resolve(&root, container);

    for (rect, index) in &cells {
        println!(
            "cell {:>2}: x={:7.2} y={:7.2} w={:7.2} h={:7.2}",
            index, rect.x, rect.y, rect.width, rect.height
        );
    }
    println!();
    print!("{}", render_ascii(&cells, container));

    Ok(())
}
