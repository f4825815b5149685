//! Template registry. Templates are compiled once; every value interpolated
//! into them is HTML-escaped on output.

use std::sync::LazyLock;

use minijinja::{AutoEscape, Environment, Value};

use crate::errors::AppError;
use crate::extraction::upload::{JOB_DESCRIPTION_FIELD, RESUMES_FIELD};
use crate::render::page::{APP_TITLE, FAQS};
use crate::render::results::RANKING_FIELD;

static TEMPLATES: LazyLock<Result<Environment<'static>, minijinja::Error>> =
    LazyLock::new(load_templates);

fn load_templates() -> Result<Environment<'static>, minijinja::Error> {
    let mut env = Environment::new();
    env.set_auto_escape_callback(|_| AutoEscape::Html);

    env.add_template("layout.html", include_str!("../../templates/layout.html"))?;
    env.add_template("form.html", include_str!("../../templates/form.html"))?;
    env.add_template("index.html", include_str!("../../templates/index.html"))?;
    env.add_template("results.html", include_str!("../../templates/results.html"))?;
    env.add_template("chart.html", include_str!("../../templates/chart.html"))?;

    env.add_global("app_title", APP_TITLE);
    env.add_global("faqs", Value::from_serialize(FAQS));
    env.add_global("resumes_field", RESUMES_FIELD);
    env.add_global("job_description_field", JOB_DESCRIPTION_FIELD);
    env.add_global("ranking_field", RANKING_FIELD);
    Ok(env)
}

/// Renders the named template with `ctx`.
pub fn render(name: &str, ctx: Value) -> Result<String, AppError> {
    let env = TEMPLATES
        .as_ref()
        .map_err(|e| AppError::Internal(anyhow::anyhow!("templates failed to load: {e}")))?;

    env.get_template(name)
        .and_then(|template| template.render(ctx))
        .map_err(|e| AppError::Internal(anyhow::anyhow!("rendering {name} failed: {e}")))
}
