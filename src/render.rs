/// Render engine - turns an ordered block collection into a choice form
///
/// Rendering resolves each randomized block's choice exactly once per call;
/// the RNG belongs to the caller, so a seeded RNG gives a reproducible form.
use crate::block::{Block, BlockKind, FieldId, Survey};
use rand::Rng;

/// Name of the generated form element
pub const FORM_NAME: &str = "unform";
/// Name of the hidden field the client-side script assembles the letter into
pub const OUTPUT_FIELD: &str = "unform_text";

pub(crate) const DEFAULT_FORM_ATTRIBUTES: &str = r#"method="post" action="submit""#;
pub(crate) const SUBMIT_SNIPPET: &str = "document.forms['unform'].submit();";
pub(crate) const OUTPUT_FIELD_HIDDEN: &str =
    r#"<textarea name="unform_text" rows=5 cols=30 hidden>"#;
pub(crate) const OUTPUT_FIELD_VISIBLE: &str = r#"<textarea name="unform_text" rows=5 cols=30>"#;

/// Options for rendering a survey into form markup
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Opaque survey identifier, echoed verbatim into a hidden field
    pub survey_id: String,
    /// Page chrome emitted before the form
    pub header: Option<String>,
    /// Page chrome emitted after the form
    pub footer: Option<String>,
    /// Attribute string for the form tag; defaults to a POST to "submit"
    pub form_attributes: Option<String>,
}

impl RenderOptions {
    /// Create new options with the given survey identifier
    pub fn new(survey_id: impl Into<String>) -> Self {
        RenderOptions {
            survey_id: survey_id.into(),
            ..RenderOptions::default()
        }
    }

    pub fn with_header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn with_form_attributes(mut self, attributes: impl Into<String>) -> Self {
        self.form_attributes = Some(attributes.into());
        self
    }
}

/// Escape a value for emission inside a double-quoted attribute. Only the
/// double-quote itself is entity-escaped; trailing newlines are trimmed.
fn attr_escape(value: &str) -> String {
    value.trim_end_matches('\n').replace('"', "&quot;")
}

/// Render the survey into a single form-markup string: the submission
/// script, static hidden fields, one titled group per choice block, the
/// output field, and a submit control.
pub fn render<R: Rng>(survey: &Survey, options: &RenderOptions, rng: &mut R) -> String {
    let mut out = String::new();

    if let Some(header) = &options.header {
        out.push_str(header);
    }

    out.push_str(&submission_script(survey.required_fields()));

    let attributes = options
        .form_attributes
        .as_deref()
        .unwrap_or(DEFAULT_FORM_ATTRIBUTES);
    out.push_str(&format!(
        r#"<form id="{0}" name="{0}" {1}>"#,
        FORM_NAME, attributes
    ));
    out.push_str(&format!(
        r#"<input type="hidden" name="survey_id" value="{}">"#,
        attr_escape(&options.survey_id)
    ));

    for block in survey.blocks() {
        render_block(&mut out, block, rng);
    }

    out.push_str(OUTPUT_FIELD_HIDDEN);
    out.push_str("</textarea>");
    out.push_str("<input type=\"button\" name=\"Submit\" onclick=submit_letter() value=\"Finished!\">\n</form>");

    if let Some(footer) = &options.footer {
        out.push_str(footer);
    }

    out
}

fn render_block<R: Rng>(out: &mut String, block: &Block, rng: &mut R) {
    match &block.kind {
        BlockKind::StaticText { text } => hidden_field(out, block.line, text),
        BlockKind::RandomStaticText { candidates } => {
            let text = pick(candidates, rng);
            hidden_field(out, block.line, text);
        }
        BlockKind::SingleChoice { options, .. } => {
            let field = block.field_id();
            open_group(out, block);
            for option in options {
                selectable(out, "radio", field, &option.text, &option.label);
            }
            close_group(out);
        }
        BlockKind::RandomizedSingleChoice { options, .. } => {
            let field = block.field_id();
            open_group(out, block);
            for option in options {
                let text = pick(&option.candidates, rng);
                selectable(out, "radio", field, text, &option.label);
            }
            close_group(out);
        }
        BlockKind::MultiChoice { options, .. } => {
            let field = block.field_id();
            open_group(out, block);
            for (i, option) in options.iter().enumerate() {
                let value = joined_text(&option.text, &option.connector, i + 1 == options.len());
                selectable(out, "checkbox", field, &value, &option.label);
            }
            close_group(out);
        }
        BlockKind::RandomizedMultiChoice { options, .. } => {
            let field = block.field_id();
            open_group(out, block);
            for (i, option) in options.iter().enumerate() {
                let text = pick(&option.candidates, rng);
                let value = joined_text(text, &option.connector, i + 1 == options.len());
                selectable(out, "checkbox", field, &value, &option.label);
            }
            close_group(out);
        }
    }
}

/// The parser never produces an empty candidate list
fn pick<'a, R: Rng>(candidates: &'a [String], rng: &mut R) -> &'a str {
    &candidates[rng.gen_range(0..candidates.len())]
}

/// Non-last options carry their connector so concatenated selections read
/// as natural language
fn joined_text(text: &str, connector: &str, is_last: bool) -> String {
    if is_last {
        text.to_string()
    } else {
        format!("{}{}", text, connector)
    }
}

fn hidden_field(out: &mut String, line: usize, text: &str) {
    out.push_str(&format!(
        r#"<input type="hidden" name="static{}" value="{}">"#,
        line,
        attr_escape(text)
    ));
}

fn open_group(out: &mut String, block: &Block) {
    let title = block.title().unwrap_or_default();
    if block.required {
        out.push_str(&format!(
            "<fieldset id=\"fieldset_{}\"><legend>{} <b>(Required)</b></legend>",
            block.field_id(),
            title
        ));
    } else {
        out.push_str(&format!(
            "<fieldset id=\"fieldset_{}\"><legend>{}</legend>",
            block.field_id(),
            title
        ));
    }
}

fn close_group(out: &mut String) {
    out.push_str("</fieldset>\n\n");
}

fn selectable(out: &mut String, control: &str, field: FieldId, value: &str, label: &str) {
    out.push_str(&format!(
        "<input type=\"{}\" name=\"{}\" value=\"{}\">{}<br>\n",
        control,
        field,
        attr_escape(value),
        label
    ));
}

/// Script fragment wiring up client-side assembly and required-field
/// validation. The required list arrives as structured identifiers and is
/// formatted here, once.
pub fn submission_script(required_fields: &[FieldId]) -> String {
    let required: Vec<String> = required_fields
        .iter()
        .map(|id| format!("'{}'", id))
        .collect();
    let required = format!("[{}]", required.join(", "));

    // The double-hash delimiter keeps the embedded "#rrggbb" color literals
    // from closing the raw string
    format!(
        r##"
<script language="JavaScript">
function assemble_letter()
{{
    document.forms['{form}'].{field}.value = "";
    var elem = document.getElementById('{form}').elements;
    var write_this = "";
    for (var i=0;i<elem.length-1;i++)
    {{
        if (elem[i].value != undefined && elem[i].value != '' && elem[i].value != false)
        {{
            if ((elem[i].type == 'radio' && elem[i].checked) || (elem[i].type == 'checkbox' && elem[i].checked) || (elem[i].type != 'radio' && elem[i].type != 'checkbox'))
            {{
                write_this += elem[i].value + " ";
            }}
        }}
    }}
    document.forms['{form}'].{field}.value = write_this;
}}
function submit_letter()
{{
    var required = {required};
    var all_required_completed = true;
    for (var i=0;i<required.length;i++)
    {{
        var group = document.getElementsByName(required[i]);
        var is_checked = false;
        for (var x=0;x<group.length;x++)
        {{
            if (group[x].checked)
            {{
                is_checked = true;
            }}
        }}
        if (is_checked == true)
        {{
            document.getElementById('fieldset_' + required[i]).style.background="#ffffff";
        }}
        else
        {{
            all_required_completed = false;
            document.getElementById('fieldset_' + required[i]).style.background="#ff9933";
        }}
    }}
    if (all_required_completed == true)
    {{
        assemble_letter();
        {submit}
    }}
}}
</script>
"##,
        form = FORM_NAME,
        field = OUTPUT_FIELD,
        required = required,
        submit = SUBMIT_SNIPPET,
    )
}
