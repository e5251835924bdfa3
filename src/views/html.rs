// ABOUTME: HTML rendering for the dashboard and recipe detail pages
// ABOUTME: Fills compile-time embedded templates with escaped view model values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{DashboardView, RecipeDetailView, SelectOption};
use crate::state::{ChartType, DetailPhase, DetailState};
use html_escape::{encode_double_quoted_attribute, encode_text};
use recipe_analytics::{FilterCriteria, Histogram};
use recipe_core::constants::{calories, messages};
use std::fmt::Write;

/// Templates embedded at compile time so rendering never touches the filesystem
const PAGE_TEMPLATE: &str = include_str!("../../templates/page.html");
const DASHBOARD_TEMPLATE: &str = include_str!("../../templates/dashboard.html");
const DETAIL_TEMPLATE: &str = include_str!("../../templates/recipe_detail.html");

const DASHBOARD_TITLE: &str = "Spoonacular Recipe Dashboard";

/// Substitute `{{KEY}}` placeholders in a single pass.
///
/// Substituted text is never rescanned, so values containing braces are
/// emitted verbatim. Unknown placeholders are left in place.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find("{{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];
        let Some(end) = after.find("}}") else {
            out.push_str(&rest[start..]);
            return out;
        };
        let key = &after[..end];
        match values.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 2]),
        }
        rest = &after[end + 2..];
    }
    out.push_str(rest);
    out
}

/// Wrap a body fragment in the page shell
fn page(title: &str, body: &str) -> String {
    fill(
        PAGE_TEMPLATE,
        &[("TITLE", &*encode_text(title)), ("BODY", body)],
    )
}

/// Page holding a single status line (loading, error, not found)
#[must_use]
pub fn render_status_page(title: &str, class: &str, message: &str) -> String {
    let body = format!(
        r#"<div class="{}">{}</div>"#,
        encode_double_quoted_attribute(class),
        encode_text(message)
    );
    page(title, &body)
}

/// Render the dashboard page for a derived view
#[must_use]
pub fn render_dashboard(view: &DashboardView) -> String {
    if view.loading {
        return render_status_page(DASHBOARD_TITLE, "loading-spinner", messages::LOADING_RECIPES);
    }
    if let Some(error) = &view.error {
        return render_status_page(DASHBOARD_TITLE, "error-message", &format!("Error: {error}"));
    }

    let summary = &view.summary;
    let criteria = &view.criteria;
    let total = summary.total_recipes.to_string();
    let min_calories = criteria.calories.min.to_string();
    let max_calories = criteria.calories.max.to_string();
    let slider_min = calories::SLIDER_MIN.to_string();
    let slider_max = calories::SLIDER_MAX.to_string();

    let body = fill(
        DASHBOARD_TEMPLATE,
        &[
            ("TOTAL_RECIPES", total.as_str()),
            ("AVERAGE_CALORIES", summary.average_calories.as_str()),
            ("MEDIAN_CALORIES", summary.median_calories.as_str()),
            ("MOST_COMMON_DIET", &*encode_text(&summary.most_common_diet)),
            ("AVERAGE_COOKING_TIME", summary.average_cooking_time.as_str()),
            ("SEARCH", &*encode_double_quoted_attribute(&criteria.search)),
            ("DIET_OPTIONS", render_options(&view.diet_options).as_str()),
            ("CUISINE_OPTIONS", render_options(&view.cuisine_options).as_str()),
            (
                "COOKING_TIME_OPTIONS",
                render_options(&view.cooking_time_options).as_str(),
            ),
            ("SLIDER_MIN", slider_min.as_str()),
            ("SLIDER_MAX", slider_max.as_str()),
            ("MIN_CALORIES", min_calories.as_str()),
            ("MAX_CALORIES", max_calories.as_str()),
            ("CHART", view.chart.as_str()),
            ("CHART_BUTTONS", render_chart_buttons(criteria, view.chart).as_str()),
            ("CHART_TITLE", view.chart_title),
            ("CHART_BARS", render_bars(view.active_histogram()).as_str()),
            ("INSIGHTS", render_items(&view.insights).as_str()),
            ("ROWS", render_rows(view).as_str()),
        ],
    );
    page(DASHBOARD_TITLE, &body)
}

/// Render the detail page for whatever phase the detail state is in
#[must_use]
pub fn render_detail(state: &DetailState) -> String {
    match state.phase() {
        DetailPhase::Loading => {
            render_status_page(DASHBOARD_TITLE, "loading", messages::LOADING_DETAILS)
        }
        DetailPhase::Failed(message) => render_status_page(DASHBOARD_TITLE, "error", message),
        DetailPhase::NotFound => {
            render_status_page(DASHBOARD_TITLE, "not-found", messages::RECIPE_NOT_FOUND)
        }
        DetailPhase::Loaded(recipe) => {
            render_recipe_detail(&RecipeDetailView::from_recipe(recipe))
        }
    }
}

/// Render a loaded recipe
#[must_use]
pub fn render_recipe_detail(view: &RecipeDetailView) -> String {
    let image = view.image.as_deref().map_or_else(String::new, |src| {
        format!(
            r#"    <img src="{}" alt="{}">"#,
            encode_double_quoted_attribute(src),
            encode_double_quoted_attribute(&view.title)
        )
    });
    let instructions = view.instructions_placeholder.map_or_else(
        || format!("    <ol>\n{}    </ol>", render_items(&view.instructions)),
        |placeholder| format!("    <p>{}</p>", encode_text(placeholder)),
    );

    let body = fill(
        DETAIL_TEMPLATE,
        &[
            ("TITLE", &*encode_text(&view.title)),
            ("IMAGE", image.as_str()),
            ("CALORIES", view.calories.as_str()),
            ("COOKING_TIME", view.cooking_time.as_str()),
            ("DIETS", &*encode_text(&view.diets)),
            ("CUISINES", &*encode_text(&view.cuisines)),
            ("INGREDIENTS", render_items(&view.ingredients).as_str()),
            ("INSTRUCTIONS", instructions.as_str()),
            ("BACK_LINK", view.back_link),
        ],
    );
    page(&view.title, &body)
}

fn render_options(options: &[SelectOption]) -> String {
    options.iter().fold(String::new(), |mut out, option| {
        let selected = if option.selected { " selected" } else { "" };
        let _ = writeln!(
            out,
            r#"            <option value="{}"{selected}>{}</option>"#,
            encode_double_quoted_attribute(option.value),
            encode_text(option.label)
        );
        out
    })
}

fn render_items(items: &[String]) -> String {
    items.iter().fold(String::new(), |mut out, item| {
        let _ = writeln!(out, "            <li>{}</li>", encode_text(item));
        out
    })
}

fn render_bars(histogram: &Histogram) -> String {
    let max = histogram.max_count();
    histogram
        .bars()
        .fold(String::new(), |mut out, (label, count)| {
            let width = if max == 0 { 0 } else { count * 100 / max };
            let _ = writeln!(
                out,
                r#"        <div class="bar-row"><span class="bar-label">{label}</span><div class="bar" style="width: {width}%"></div><span>{count}</span></div>"#
            );
            out
        })
}

fn render_chart_buttons(criteria: &FilterCriteria, active: ChartType) -> String {
    [ChartType::Calories, ChartType::CookingTime]
        .into_iter()
        .fold(String::new(), |mut out, chart| {
            let class = if chart == active { r#" class="active""# } else { "" };
            let _ = writeln!(
                out,
                r#"            <a href="{}"{class}>{}</a>"#,
                encode_double_quoted_attribute(&dashboard_link(criteria, chart)),
                chart.button_label()
            );
            out
        })
}

fn render_rows(view: &DashboardView) -> String {
    view.rows.iter().fold(String::new(), |mut out, row| {
        let _ = writeln!(
            out,
            r#"                <tr>
                    <td>{}</td>
                    <td>{}</td>
                    <td>{}</td>
                    <td><a href="{}" class="view-details-link">View Details</a></td>
                </tr>"#,
            encode_text(&row.title),
            row.cooking_time,
            row.calories,
            encode_double_quoted_attribute(&row.link)
        );
        out
    })
}

/// Dashboard URL that reproduces `criteria` with `chart` selected
#[must_use]
pub fn dashboard_link(criteria: &FilterCriteria, chart: ChartType) -> String {
    let mut params = Vec::new();
    if !criteria.search.is_empty() {
        params.push(("search", criteria.search.clone()));
    }
    if let Some(diet) = &criteria.diet {
        params.push(("diet", diet.clone()));
    }
    if let Some(cuisine) = &criteria.cuisine {
        params.push(("cuisine", cuisine.clone()));
    }
    if let Some(range) = criteria.cooking_time {
        params.push(("cooking_time", range.to_string()));
    }
    params.push(("min_calories", criteria.calories.min.to_string()));
    params.push(("max_calories", criteria.calories.max.to_string()));
    params.push(("chart", chart.as_str().to_owned()));

    let query = params
        .iter()
        .map(|(key, value)| format!("{key}={}", urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    format!("/?{query}")
}
