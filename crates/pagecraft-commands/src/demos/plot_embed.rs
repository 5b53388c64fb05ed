//! A chart rendered elsewhere, embedded as a raw fragment.

use pagecraft_core::html::{div, p};
use pagecraft_core::types::page::Head;
use pagecraft_core::{IntoPage, Page};
use pagecraft_pages::components::{CardVariant, card};
use pagecraft_pages::{FileFragment, FragmentSource, StaticFragment, embed, titled_with_head};

use super::column;
use crate::error::DemoError;

/// Script the exported chart fragments expect on the page.
pub(crate) const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

/// Stand-in used when no exported chart is configured.
const PLACEHOLDER: &str = r##"<canvas id="placeholder-plot" width="640" height="360"></canvas>
<script>
(function () {
  var ctx = document.getElementById("placeholder-plot").getContext("2d");
  var w = 640, h = 360;
  ctx.strokeStyle = "#3b82f6";
  ctx.lineWidth = 2;
  ctx.beginPath();
  for (var x = 0; x <= w; x++) {
    var t = (x / w) * 4 * Math.PI;
    var y = h / 2 - Math.sin(t) * Math.cos(t / 2) * (h / 3);
    if (x === 0) { ctx.moveTo(x, y); } else { ctx.lineTo(x, y); }
  }
  ctx.stroke();
})();
</script>"##;

fn source(ctx: &super::DemoContext) -> Box<dyn FragmentSource> {
	match &ctx.embed {
		Some(path) => Box::new(FileFragment::new(path.clone())),
		None => Box::new(StaticFragment::new("placeholder", PLACEHOLDER)),
	}
}

pub(super) fn page(ctx: &super::DemoContext) -> Result<Page, DemoError> {
	let source = source(ctx);
	let plot = embed(source.as_ref(), "plot-container")?;

	let mut head = Head::new();
	if ctx.embed.is_some() {
		head = head.script_src(PLOTLY_CDN);
	}

	let caption = match &ctx.embed {
		Some(_) => format!("Interactive chart loaded from {}", source.name()),
		None => "No exported chart configured; showing a canvas placeholder.".to_string(),
	};

	Ok(titled_with_head(
		head,
		"Embedded Plot",
		[div()
			.style(column("900px").to_inline_style())
			.child(card(
				"3D Surface Plot",
				[
					p().style("color: #64748b;").child(caption).into_page(),
					plot,
				],
				CardVariant::Elevated,
			))
			.into_page()],
	))
}
