use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use printpdf::image_crate::codecs::png::PngDecoder;
use printpdf::{BuiltinFont, Image, ImageTransform, Mm, PdfDocument};

use crate::eval::EvaluationResult;

// ---------------------------------------------------------------------------
// PDF report (A4, single page)
// ---------------------------------------------------------------------------

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);

/// Write the titled PDF report: metric name, results table, and the
/// already-rendered chart PNG embedded below the table.
pub fn write_report_pdf(
    result: &EvaluationResult,
    chart_png: &Path,
    out: &Path,
) -> Result<()> {
    let (doc, page, layer) =
        PdfDocument::new("Bias Evaluation Report", PAGE_WIDTH, PAGE_HEIGHT, "report");
    let layer = doc.get_page(page).get_layer(layer);

    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .context("loading builtin font")?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .context("loading builtin font")?;

    layer.use_text("Bias Evaluation Report", 20.0, Mm(20.0), Mm(272.0), &bold);
    layer.use_text(
        format!("Dataset: {}", result.dataset),
        12.0,
        Mm(20.0),
        Mm(261.0),
        &regular,
    );
    layer.use_text(
        format!("Metric: {}", result.metric),
        12.0,
        Mm(20.0),
        Mm(254.0),
        &regular,
    );

    // Results table
    let mut y = 240.0;
    layer.use_text("Group", 12.0, Mm(20.0), Mm(y), &bold);
    layer.use_text("Group size", 12.0, Mm(90.0), Mm(y), &bold);
    layer.use_text("Simulated accuracy (%)", 12.0, Mm(130.0), Mm(y), &bold);
    for group in &result.groups {
        y -= 7.0;
        layer.use_text(group.group.as_str(), 11.0, Mm(20.0), Mm(y), &regular);
        layer.use_text(group.size.to_string(), 11.0, Mm(90.0), Mm(y), &regular);
        layer.use_text(
            format!("{:.1}", group.accuracy),
            11.0,
            Mm(130.0),
            Mm(y),
            &regular,
        );
    }

    // Embedded chart: 900x600 px at 150 dpi → 152.4 x 101.6 mm
    let file = File::open(chart_png)
        .with_context(|| format!("opening chart image {}", chart_png.display()))?;
    let decoder = PngDecoder::new(BufReader::new(file)).context("decoding chart PNG")?;
    let image = Image::try_from(decoder).context("embedding chart PNG")?;
    image.add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(28.0)),
            translate_y: Some(Mm(60.0)),
            dpi: Some(150.0),
            ..Default::default()
        },
    );

    let file =
        File::create(out).with_context(|| format!("creating PDF at {}", out.display()))?;
    doc.save(&mut BufWriter::new(file))
        .with_context(|| format!("writing PDF to {}", out.display()))?;
    Ok(())
}
