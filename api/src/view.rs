use axum::response::Html;
use minijinja::Environment;
use once_cell::sync::Lazy;
use serde::Serialize;
use shared::error::AppResult;

// テンプレートはバイナリに埋め込み、初回参照時にコンパイルする
const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("customer_list.html", include_str!("../templates/customer_list.html")),
    ("customer_best.html", include_str!("../templates/customer_best.html")),
    ("customer_new_form.html", include_str!("../templates/customer_new_form.html")),
    ("customer_edit_form.html", include_str!("../templates/customer_edit_form.html")),
    ("customer_detail.html", include_str!("../templates/customer_detail.html")),
    ("reservation_edit_form.html", include_str!("../templates/reservation_edit_form.html")),
];

static ENVIRONMENT: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.set_loader(|name| {
        Ok(TEMPLATES
            .iter()
            .find(|(template_name, _)| *template_name == name)
            .map(|(_, source)| source.to_string()))
    });
    env
});

pub fn render<S: Serialize>(name: &str, ctx: S) -> AppResult<Html<String>> {
    let html = ENVIRONMENT.get_template(name)?.render(ctx)?;
    Ok(Html(html))
}
