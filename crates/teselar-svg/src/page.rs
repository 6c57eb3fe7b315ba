//! Standalone HTML page assembly.
//!
//! A [`Page`] wraps one or more rendered charts into a self-contained HTML
//! document: embedded stylesheet, a shared tooltip element, and a small
//! script for hover and dataset switching. Every chart is pre-rendered
//! server-side; switching swaps `#chart`'s content from inert `<template>`
//! elements, which tears the old chart down and rebuilds the new one
//! without any client-side layout work.

use crate::chart::{escape, Chart};
use std::fmt::Write;

/// A chart slot on a page: trigger id, button label, rendered chart.
#[derive(Debug, Clone)]
pub struct Panel {
    pub key: String,
    pub label: String,
    pub chart: Chart,
}

/// A standalone HTML document with one or more switchable charts.
#[derive(Debug, Clone)]
pub struct Page {
    heading: String,
    panels: Vec<Panel>,
    initial: Option<String>,
}

impl Page {
    /// Creates an empty page with the given heading.
    #[must_use]
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            panels: Vec::new(),
            initial: None,
        }
    }

    /// Adds a chart panel. The key becomes the switcher button's element
    /// id, so it should be a short identifier.
    #[must_use]
    pub fn with_panel(
        mut self,
        key: impl Into<String>,
        label: impl Into<String>,
        chart: Chart,
    ) -> Self {
        self.panels.push(Panel {
            key: key.into(),
            label: label.into(),
            chart,
        });
        self
    }

    /// Selects which panel renders first. Defaults to the first panel.
    #[must_use]
    pub fn with_initial(mut self, key: impl Into<String>) -> Self {
        self.initial = Some(key.into());
        self
    }

    /// Panels in insertion order.
    #[must_use]
    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    fn initial_panel(&self) -> Option<&Panel> {
        match &self.initial {
            Some(key) => self.panels.iter().find(|p| &p.key == key),
            None => self.panels.first(),
        }
        .or_else(|| self.panels.first())
    }

    /// Serializes the document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut html = String::with_capacity(16 * 1024);
        let switchable = self.panels.len() > 1;
        let _ = writeln!(
            html,
            "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>",
            escape(&self.heading)
        );
        let _ = writeln!(html, "<style>{STYLE}</style>\n</head>\n<body>");
        let _ = writeln!(html, "<h1 id=\"title\">{}</h1>", escape(&self.heading));

        if switchable {
            html.push_str("<div id=\"switcher\">\n");
            let initial_key = self.initial_panel().map(|p| p.key.as_str());
            for panel in &self.panels {
                let class = if Some(panel.key.as_str()) == initial_key {
                    " class=\"init\""
                } else {
                    ""
                };
                let _ = writeln!(
                    html,
                    "<button id=\"{}\"{}>{}</button>",
                    escape(&panel.key),
                    class,
                    escape(&panel.label)
                );
            }
            html.push_str("</div>\n");
        }

        html.push_str("<div id=\"chart\">\n");
        if let Some(panel) = self.initial_panel() {
            html.push_str(&panel.chart.to_svg());
        }
        html.push_str("</div>\n");
        html.push_str("<div class=\"tooltip\" id=\"tooltip\" style=\"opacity: 0;\"></div>\n");

        if switchable {
            for panel in &self.panels {
                let _ = writeln!(
                    html,
                    "<template id=\"chart-{}\">\n{}</template>",
                    escape(&panel.key),
                    panel.chart.to_svg()
                );
            }
        }

        html.push_str("<script>\n");
        html.push_str(TOOLTIP_SCRIPT);
        if switchable {
            html.push_str(SWITCH_SCRIPT);
        }
        html.push_str("</script>\n</body>\n</html>\n");
        html
    }
}

const STYLE: &str = "\
body { margin: 16px; background-color: #fdfdfd; font-family: Verdana, 'Segoe UI', sans-serif; }
#title { font-size: 28px; margin: 0 0 12px 0; }
#switcher { margin-bottom: 12px; }
#switcher button { padding: 6px 14px; margin-right: 6px; border: 1px solid #999; background-color: #eee; cursor: pointer; }
#switcher button.init { background-color: #1f77b4; border-color: #1f77b4; color: #fff; }
svg text { font-size: 12px; fill: #1a1a1a; }
.tile-text { font-size: 10px; pointer-events: none; }
.title { font-size: 18px; font-weight: bold; }
.tooltip { position: absolute; pointer-events: none; background-color: rgba(0, 0, 0, 0.82); color: #fff; padding: 6px 10px; border-radius: 4px; font-size: 12px; line-height: 1.5; transition: opacity 0.15s; }
";

/// Hover handlers are delegated from the chart container so panels swapped
/// in later keep working without re-binding.
const TOOLTIP_SCRIPT: &str = "\
(function () {
  var chart = document.getElementById('chart');
  var tooltip = document.getElementById('tooltip');
  chart.addEventListener('mouseover', function (event) {
    var tile = event.target.closest('.tile');
    if (!tile) { return; }
    tooltip.style.opacity = 0.9;
    tooltip.innerHTML = '<strong>Name: </strong>' + tile.getAttribute('data-name') +
      '<br><strong>Category:</strong> ' + tile.getAttribute('data-category') +
      '<br><strong>Value:</strong> ' + tile.getAttribute('data-value');
    tooltip.setAttribute('data-value', tile.getAttribute('data-value'));
    tooltip.style.left = (event.pageX + 10) + 'px';
    tooltip.style.top = (event.pageY - 28) + 'px';
  });
  chart.addEventListener('mouseout', function (event) {
    if (!event.target.closest('.tile')) { return; }
    tooltip.style.opacity = 0;
  });
})();
";

const SWITCH_SCRIPT: &str = "\
(function () {
  var chart = document.getElementById('chart');
  var tooltip = document.getElementById('tooltip');
  var buttons = document.querySelectorAll('#switcher button');
  function show(key) {
    var template = document.getElementById('chart-' + key);
    if (!template) { return; }
    chart.innerHTML = '';
    chart.appendChild(template.content.cloneNode(true));
    tooltip.style.opacity = 0;
    tooltip.innerHTML = '';
    for (var i = 0; i < buttons.length; i++) {
      buttons[i].classList.toggle('init', buttons[i].id === key);
    }
  }
  for (var i = 0; i < buttons.length; i++) {
    buttons[i].addEventListener('click', function () { show(this.id); });
  }
})();
";
