//! Plain HTML render functions for the dashboard pages.
//!
//! Pages are assembled by string building. Every dynamic value passes
//! through [`escape`] before it reaches the markup.

use scriptdeck_domain::outcome::RunReport;
use scriptdeck_domain::script::AutomationScript;

/// Escape a value for safe interpolation into HTML text or attributes.
pub(crate) fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Wrap page content in the shared document shell.
fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{title} — scriptdeck</title>\n\
         <style>\n\
         body {{ font-family: sans-serif; margin: 2rem auto; max-width: 40rem; padding: 0 1rem; }}\n\
         table {{ border-collapse: collapse; width: 100%; }}\n\
         td, th {{ text-align: left; padding: 0.5rem; border-bottom: 1px solid #ddd; }}\n\
         .description {{ color: #555; }}\n\
         form {{ display: inline; }}\n\
         </style>\n\
         </head>\n\
         <body>\n\
         <h1>{title}</h1>\n\
         {body}\
         </body>\n\
         </html>\n",
        title = escape(title),
    )
}

/// One table row per script: name, description, and a Run button posting
/// to the row's positional run endpoint.
fn script_row(index: usize, script: &AutomationScript) -> String {
    format!(
        "<tr>\n\
         <td>{name}</td>\n\
         <td class=\"description\">{description}</td>\n\
         <td><form method=\"post\" action=\"/scripts/{index}/run\">\
         <button type=\"submit\">Run</button></form></td>\n\
         </tr>\n",
        name = escape(&script.name),
        description = escape(&script.description),
    )
}

/// The script list page.
pub(crate) fn list_page(scripts: &[AutomationScript]) -> String {
    let mut body = String::from(
        "<table>\n<tr><th>Name</th><th>Description</th><th></th></tr>\n",
    );
    for (index, script) in scripts.iter().enumerate() {
        body.push_str(&script_row(index, script));
    }
    body.push_str("</table>\n");
    body.push_str(
        "<p><form method=\"post\" action=\"/scripts/reload\">\
         <button type=\"submit\">Reload</button></form></p>\n",
    );
    layout("Automation scripts", &body)
}

/// The result page shown after a run completes.
pub(crate) fn run_result_page(report: &RunReport) -> String {
    let body = format!(
        "<p>{message}</p>\n\
         <p><a href=\"/\">Back to scripts</a></p>\n",
        message = escape(&report.message()),
    );
    layout("Run result", &body)
}

/// A terminal error page.
pub(crate) fn error_page(message: &str) -> String {
    let body = format!(
        "<p>{message}</p>\n\
         <p><a href=\"/\">Back to scripts</a></p>\n",
        message = escape(message),
    );
    layout("Something went wrong", &body)
}
