//! Page model and HTML template.
//!
//! # Design Decisions
//! - [`PageModel::build`] escapes every request-derived value once
//! - [`PageModel::render`] only sees [`SafeHtml`] and never escapes
//! - Layout and styling are cosmetic and kept inline in the template

use std::fmt::Write;

use url::form_urlencoded;

use crate::cgi::{escape_html, RequestContext, SafeHtml};
use crate::config::schema::PageConfig;
use crate::render::facts::DynamicFacts;

/// Shown in place of an empty query string.
pub const NO_QUERY_PLACEHOLDER: &str = "(none)";

/// Everything the template needs, already safe to embed.
#[derive(Debug, Clone)]
pub struct PageModel {
    pub title: SafeHtml,
    pub back_link: SafeHtml,
    pub weekday: SafeHtml,
    pub time: SafeHtml,
    pub method: SafeHtml,
    pub script_path: SafeHtml,
    pub query_string: SafeHtml,
    pub remote_address: SafeHtml,
    /// Decoded query parameters. `None` hides the section.
    pub parameters: Option<Vec<(SafeHtml, SafeHtml)>>,
    /// Label/value rows. `None` hides the section.
    pub environment: Option<Vec<(SafeHtml, SafeHtml)>>,
    pub color: SafeHtml,
    pub number: SafeHtml,
}

impl PageModel {
    pub fn build(ctx: &RequestContext, facts: &DynamicFacts, page: &PageConfig) -> Self {
        let query_string = escape_html(ctx.query_string());
        let query_string = if query_string.is_empty() {
            SafeHtml::trusted(NO_QUERY_PLACEHOLDER)
        } else {
            query_string
        };

        let parameters = if page.show_parameters {
            Some(decode_parameters(ctx.query_string()))
        } else {
            None
        };

        let environment = if page.show_environment {
            Some(vec![
                (
                    SafeHtml::trusted("Responder Version"),
                    SafeHtml::trusted(env!("CARGO_PKG_VERSION")),
                ),
                (
                    SafeHtml::trusted("Server Software"),
                    escape_html(ctx.server_software()),
                ),
                (
                    SafeHtml::trusted("Gateway Interface"),
                    escape_html(ctx.gateway_interface()),
                ),
            ])
        } else {
            None
        };

        Self {
            title: escape_html(&page.title),
            back_link: escape_html(&page.back_link),
            weekday: SafeHtml::trusted(facts.weekday()),
            time: SafeHtml::trusted(facts.time()),
            method: escape_html(ctx.method()),
            script_path: escape_html(ctx.script_path()),
            query_string,
            remote_address: escape_html(ctx.remote_address()),
            parameters,
            environment,
            color: SafeHtml::trusted(facts.color.as_str()),
            number: SafeHtml::trusted(facts.number.to_string()),
        }
    }

    pub fn render(&self) -> String {
        let mut html = String::with_capacity(4096);
        // Writing into a String cannot fail.
        let _ = self.write_html(&mut html);
        html
    }

    fn write_html(&self, html: &mut String) -> std::fmt::Result {
        writeln!(html, "<!DOCTYPE html>")?;
        writeln!(html, "<html lang=\"en\">")?;
        writeln!(html, "<head>")?;
        writeln!(html, "    <meta charset=\"UTF-8\">")?;
        writeln!(
            html,
            "    <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">"
        )?;
        writeln!(html, "    <title>{}</title>", self.title)?;
        writeln!(html, "    <style>{STYLE}</style>")?;
        writeln!(html, "</head>")?;
        writeln!(html, "<body>")?;
        writeln!(html, "    <div class=\"container\">")?;
        writeln!(html, "        <h1>{}</h1>", self.title)?;
        writeln!(
            html,
            "        <p>This page was dynamically generated by a CGI program.</p>"
        )?;

        writeln!(html, "        <div class=\"info\">")?;
        writeln!(html, "            <h3>Current Server Time:</h3>")?;
        writeln!(
            html,
            "            <p><strong>{}, {}</strong></p>",
            self.weekday, self.time
        )?;
        writeln!(html, "        </div>")?;

        writeln!(html, "        <h2>Request Details</h2>")?;
        writeln!(html, "        <div class=\"info\">")?;
        field(html, "Request Method", &self.method)?;
        field(html, "Script Name", &self.script_path)?;
        field(html, "Query String", &self.query_string)?;
        field(html, "Remote Address", &self.remote_address)?;
        writeln!(html, "        </div>")?;

        if let Some(parameters) = self.parameters.as_ref().filter(|p| !p.is_empty()) {
            writeln!(html, "        <h2>Query Parameters</h2>")?;
            table(html, "Name", "Value", parameters)?;
        }

        if let Some(environment) = &self.environment {
            writeln!(html, "        <h2>Environment</h2>")?;
            table(html, "Variable", "Value", environment)?;
        }

        writeln!(html, "        <h2>Dynamic Content Example</h2>")?;
        writeln!(html, "        <div class=\"info\">")?;
        writeln!(
            html,
            "            <p>Random color of the day: <strong style=\"color: {0};\">{0}</strong></p>",
            self.color
        )?;
        writeln!(
            html,
            "            <p>Random number: <strong>{}</strong></p>",
            self.number
        )?;
        writeln!(html, "        </div>")?;

        writeln!(
            html,
            "        <a href=\"{}\">&larr; Back to Home</a>",
            self.back_link
        )?;
        writeln!(html, "    </div>")?;
        writeln!(html, "</body>")?;
        writeln!(html, "</html>")
    }
}

fn field(html: &mut String, label: &str, value: &SafeHtml) -> std::fmt::Result {
    writeln!(
        html,
        "            <p><strong>{label}:</strong> {value}</p>"
    )
}

fn table(
    html: &mut String,
    left: &str,
    right: &str,
    rows: &[(SafeHtml, SafeHtml)],
) -> std::fmt::Result {
    writeln!(html, "        <table>")?;
    writeln!(html, "            <tr><th>{left}</th><th>{right}</th></tr>")?;
    for (name, value) in rows {
        writeln!(html, "            <tr><td>{name}</td><td>{value}</td></tr>")?;
    }
    writeln!(html, "        </table>")
}

/// Decode `application/x-www-form-urlencoded` pairs and escape them.
pub fn decode_parameters(query: &str) -> Vec<(SafeHtml, SafeHtml)> {
    form_urlencoded::parse(query.as_bytes())
        .map(|(name, value)| (escape_html(&name), escape_html(&value)))
        .collect()
}

const STYLE: &str = "
        body { font-family: Arial, sans-serif; background: linear-gradient(135deg, #667eea 0%, #764ba2 100%); display: flex; justify-content: center; align-items: center; min-height: 100vh; margin: 0; padding: 20px; }
        .container { background: white; padding: 40px; border-radius: 10px; box-shadow: 0 10px 30px rgba(0,0,0,0.3); max-width: 700px; }
        h1 { color: #667eea; margin-bottom: 20px; }
        h2 { color: #333; margin-top: 25px; margin-bottom: 15px; }
        .info { background: #f8f9fa; padding: 15px; border-radius: 5px; margin: 15px 0; }
        .info p { margin: 8px 0; color: #333; }
        .info strong { color: #667eea; }
        table { width: 100%; border-collapse: collapse; margin: 15px 0; }
        th, td { padding: 10px; text-align: left; border-bottom: 1px solid #ddd; }
        th { background: #667eea; color: white; }
        a { display: inline-block; margin-top: 20px; color: #667eea; text-decoration: none; font-weight: bold; }
        a:hover { text-decoration: underline; }
    ";
