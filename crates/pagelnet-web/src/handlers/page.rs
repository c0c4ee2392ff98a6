//! The single dashboard page: heatmap panel plus network explorer.
//!
//! Rendered as one inline HTML shell; the CSS and the client wiring live in
//! `templates/` and are compiled in. Graph drawing (cytoscape) and heatmap
//! plotting (Plotly) are CDN assets — the server never computes positions.

use axum::{extract::State, response::Html};

use crate::state::SharedState;

const STYLE_CSS: &str = include_str!("../../templates/style.css");
const APP_JS: &str = include_str!("../../templates/dashboard.js");

const LAYOUTS: [&str; 5] = ["grid", "random", "circle", "cose", "concentric"];

pub async fn dashboard(State(state): State<SharedState>) -> Html<String> {
    let defaults = serde_json::json!({
        "focal": state.defaults.focal,
        "depth": state.defaults.depth,
        "lr_min": state.defaults.lr_min,
        "p_max": state.defaults.p_max,
        "layout": state.defaults.layout,
    });

    let layout_options: String = LAYOUTS
        .iter()
        .map(|name| {
            let selected = if *name == state.defaults.layout {
                " selected"
            } else {
                ""
            };
            let label = capitalize(name);
            format!(r#"<option value="{name}"{selected}>{label}</option>"#)
        })
        .collect();

    Html(render_dashboard(
        &defaults.to_string(),
        &layout_options,
        state.defaults.depth,
        state.defaults.lr_min,
        state.defaults.p_max,
    ))
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn render_dashboard(
    defaults_json: &str,
    layout_options: &str,
    depth: u32,
    lr_min: f64,
    p_max: f64,
) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <title>Pagelnet — Association Network Explorer</title>
    <style>{STYLE_CSS}</style>
    <script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
    <script src="https://unpkg.com/cytoscape@3.30.2/dist/cytoscape.min.js"></script>
</head>
<body>
<div class="container">
    <header>
        <h1>Pagelnet</h1>
        <p>Explore the precomputed Pagel association network and its score tables.</p>
    </header>
    <hr>
    <div class="row">
        <div class="col">
            <h3>Pagel Heatmap</h3>
            <div class="controls">
                <div class="control">
                    <label for="metric-select">Metric</label>
                    <select id="metric-select">
                        <option value="lr" selected>Likelihood Ratio</option>
                        <option value="p">P Value</option>
                    </select>
                </div>
                <div class="control">
                    <label for="table-select">Table</label>
                    <select id="table-select">
                        <option value="feature" selected>Feature vs Feature</option>
                        <option value="habitat">Feature vs Habitat</option>
                    </select>
                </div>
                <button class="btn btn-primary" id="heatmap-button">Update Plot</button>
            </div>
            <div id="heatmap"></div>
        </div>
        <div class="col">
            <h3>Network Visualization</h3>
            <div class="controls">
                <div class="control">
                    <label for="layout-select">Network layout</label>
                    <select id="layout-select">{layout_options}</select>
                </div>
                <div class="control">
                    <label for="focal-select">Node of interest</label>
                    <select id="focal-select"></select>
                </div>
                <div class="control">
                    <label for="depth-input">Degree (depth of neighborhood)</label>
                    <input id="depth-input" type="number" min="0" step="1" value="{depth}">
                </div>
                <div class="control">
                    <label for="lr-input">Likelihood Ratio lower bound</label>
                    <input id="lr-input" type="number" min="0" value="{lr_min}">
                </div>
                <div class="control">
                    <label for="p-input">p-value upper bound</label>
                    <input id="p-input" type="number" min="0" max="1" step="0.001" value="{p_max}">
                </div>
                <button class="btn btn-success" id="network-button">Update Network</button>
            </div>
            <div id="network"></div>
            <div class="card">
                <div class="card-header">Network Properties</div>
                <ul class="list-group" id="summary"></ul>
            </div>
        </div>
    </div>
</div>
<script id="app-defaults" type="application/json">{defaults_json}</script>
<script>{APP_JS}</script>
</body>
</html>"#
    )
}
