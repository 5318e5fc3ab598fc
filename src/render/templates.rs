//! Handlebars sources for every console fragment.
//!
//! Values go through `{{ }}` and are HTML-escaped. `{{{ }}}` is reserved for
//! fragments this crate rendered itself.

pub const RESULT: &str = "result";
pub const CLASSIFICATION: &str = "classification";
pub const AGENT: &str = "agent";
pub const AGENT_EMAIL: &str = "agent_email";
pub const AGENT_JSON: &str = "agent_json";
pub const AGENT_PDF: &str = "agent_pdf";
pub const ACTIONS: &str = "actions";
pub const ERROR_PANEL: &str = "error_panel";
pub const NOTIFICATIONS: &str = "notifications";
pub const HISTORY: &str = "history";
pub const TRACE_DETAIL: &str = "trace_detail";
pub const PAGE: &str = "page";

/// `(name, source)` pairs registered at startup.
pub const ALL: &[(&str, &str)] = &[
    (RESULT, RESULT_SRC),
    (CLASSIFICATION, CLASSIFICATION_SRC),
    (AGENT, AGENT_SRC),
    (AGENT_EMAIL, AGENT_EMAIL_SRC),
    (AGENT_JSON, AGENT_JSON_SRC),
    (AGENT_PDF, AGENT_PDF_SRC),
    (ACTIONS, ACTIONS_SRC),
    (ERROR_PANEL, ERROR_PANEL_SRC),
    (NOTIFICATIONS, NOTIFICATIONS_SRC),
    (HISTORY, HISTORY_SRC),
    (TRACE_DETAIL, TRACE_DETAIL_SRC),
    (PAGE, PAGE_SRC),
];

const RESULT_SRC: &str = r#"<div class="result-card">
  <div class="d-flex justify-content-between align-items-center mb-3">
    <h4>Processing Results</h4>
    <small class="text-muted">Trace ID: {{trace_id}}</small>
  </div>
  <p class="text-muted">Processing time: {{elapsed_ms}}ms</p>
  {{{classification}}}
  {{{agent}}}
  {{{actions}}}
</div>
"#;

const CLASSIFICATION_SRC: &str = r#"<div class="classification-section mb-3">
  <h5>Classification</h5>
  <div class="row">
    <div class="col-md-4"><strong>Format:</strong> <span class="badge {{format.class}}">{{format.label}}</span></div>
    <div class="col-md-4"><strong>Intent:</strong> <span class="badge {{intent.class}}">{{intent.label}}</span></div>
    <div class="col-md-4"><strong>Confidence:</strong> {{confidence}}</div>
  </div>
  <div class="mt-2"><strong>Content Preview:</strong><pre class="content-preview">{{content_preview}}</pre></div>
</div>
"#;

const AGENT_SRC: &str = r#"<div class="agent-section mb-3">
  <h5>{{label}} Agent Results</h5>
  {{{body}}}
</div>
"#;

const AGENT_EMAIL_SRC: &str = r#"<div class="row">
  <div class="col-md-6">
    <p><strong>Sender:</strong> {{sender}}</p>
    <p><strong>Recipient:</strong> {{recipient}}</p>
    <p><strong>Subject:</strong> {{subject}}</p>
    <p><strong>Issue Type:</strong> {{issue_type}}</p>
    <p><strong>Deadline:</strong> {{deadline}}</p>
  </div>
  <div class="col-md-6">
    <p><strong>Tone:</strong> <span class="badge {{tone.class}}">{{tone.label}}</span> <small class="text-muted">Sentiment: {{sentiment}}</small></p>
    {{#if tone_reasoning}}<p class="small text-muted">{{tone_reasoning}}</p>{{/if}}
    <p><strong>Urgency:</strong> <span class="badge {{urgency.class}}">{{urgency.label}}</span></p>
    <p><strong>Recommended Action:</strong> {{recommended_action}}</p>
  </div>
  {{#if key_points}}
  <div class="col-12">
    <strong>Key Points:</strong>
    <ul class="key-points">
      {{#each key_points}}<li>{{this}}</li>
      {{/each}}
    </ul>
  </div>
  {{/if}}
</div>
"#;

const AGENT_JSON_SRC: &str = r#"<div class="row">
  <div class="col-md-6">
    <p><strong>JSON Type:</strong> {{json_type}}</p>
    <p><strong>Schema Valid:</strong> {{#if schema_valid}}Yes{{else}}No{{/if}}</p>
    {{#if missing_fields}}<p class="small"><strong>Missing Fields:</strong> {{#each missing_fields}}<code>{{this}}</code>{{#unless @last}}, {{/unless}}{{/each}}</p>{{/if}}
    {{#if type_errors}}<ul class="type-errors small">
      {{#each type_errors}}<li>{{this}}</li>
      {{/each}}
    </ul>{{/if}}
    <p><strong>Risk Level:</strong> <span class="badge {{risk.class}}">{{risk.label}}</span></p>
  </div>
  <div class="col-md-6">
    <strong>Anomalies:</strong>
    {{#if anomalies}}
    <ul class="anomalies">
      {{#each anomalies}}<li><strong>{{kind}}:</strong> {{description}}{{#if severity}} <span class="badge {{severity.class}}">{{severity.label}}</span>{{/if}}</li>
      {{/each}}
    </ul>
    {{else}}
    <p class="text-muted">No anomalies detected</p>
    {{/if}}
  </div>
</div>
"#;

const AGENT_PDF_SRC: &str = r#"<div class="row">
  <div class="col-md-6">
    <p><strong>Document Type:</strong> {{document_type}}</p>
    <p><strong>Text Length:</strong> {{text_length}} characters</p>
    {{#if total_amount}}<p><strong>Total Amount:</strong> ${{total_amount}}</p>{{/if}}
  </div>
  <div class="col-md-6">
    <strong>Flags:</strong>
    {{#if flags}}
    <ul class="flags">
      {{#each flags}}<li><strong>{{kind}}:</strong> {{description}}{{#if severity}} <span class="badge {{severity.class}}">{{severity.label}}</span>{{/if}}</li>
      {{/each}}
    </ul>
    {{else}}
    <p class="text-muted">No flags raised</p>
    {{/if}}
    {{#if compliance_flags}}
    <strong>Compliance Flags:</strong>
    <ul class="compliance-flags">
      {{#each compliance_flags}}<li><strong>{{kind}}:</strong> {{description}}{{#if keyword}} <small class="text-muted">({{keyword}})</small>{{/if}}</li>
      {{/each}}
    </ul>
    {{/if}}
  </div>
</div>
"#;

const ACTIONS_SRC: &str = r#"<div class="actions-section">
  <h5>Actions Triggered</h5>
  <div class="row text-center mb-2">
    <div class="col-4"><strong>{{total}}</strong><br><small>Total</small></div>
    <div class="col-4 text-success"><strong>{{successful}}</strong><br><small>Successful</small></div>
    <div class="col-4 text-danger"><strong>{{failed}}</strong><br><small>Failed</small></div>
  </div>
  {{#if actions}}
  <table class="table table-sm">
    <thead><tr><th>Action</th><th>Status</th><th>Details</th></tr></thead>
    <tbody>
      {{#each actions}}<tr>
        <td>{{action_type}}</td>
        <td>{{#if success}}<span class="badge bg-success">Success</span>{{else}}<span class="badge bg-danger">Failed</span>{{/if}}</td>
        <td>{{detail}}</td>
      </tr>
      {{/each}}
    </tbody>
  </table>
  {{else}}
  <p class="text-muted">No actions were triggered</p>
  {{/if}}
</div>
"#;

const ERROR_PANEL_SRC: &str = r#"<div class="alert alert-danger error-panel">
  <h5>Processing Failed</h5>
  <p>{{message}}</p>
</div>
"#;

const NOTIFICATIONS_SRC: &str = r#"{{#each notifications}}<div class="alert alert-{{level}} alert-dismissible notification" data-id="{{id}}">
  {{message}}
  <form method="post" action="/notifications/{{id}}/dismiss" class="d-inline">
    <button type="submit" class="btn-close" aria-label="Close"></button>
  </form>
</div>
{{/each}}"#;

const HISTORY_SRC: &str = r#"{{#if entries}}{{#each entries}}<div class="trace-item">
  <div class="d-flex justify-content-between">
    <span><span class="badge {{format.class}}">{{format.label}}</span> <span class="badge {{intent.class}}">{{intent.label}}</span></span>
    <small class="text-muted">{{timestamp}}</small>
  </div>
  <div class="mt-1">
    <span class="status {{status_class}}">{{status}}</span>
    <small>Agent: {{agent_type}}</small>
    {{#if processing_time}}<small>Time: {{processing_time}}</small>{{/if}}
    <small>Actions: {{action_total}} ({{success_count}} ok, {{failure_count}} failed)</small>
  </div>
  <pre class="content-preview">{{content_preview}}</pre>
  <a href="{{href}}" class="trace-link"><small>{{trace_id}}</small></a>
</div>
{{/each}}{{else}}<div class="text-center text-muted">
  <p>No processing history yet</p>
</div>
{{/if}}"#;

const TRACE_DETAIL_SRC: &str = r#"<div class="trace-detail">
  <h5>Trace Details: {{trace_id}}</h5>
  <h6>Classification</h6>
  <pre>{{classification}}</pre>
  <h6>Agent Result</h6>
  <pre>{{agent_result}}</pre>
  <h6>Action Result</h6>
  <pre>{{action_result}}</pre>
</div>
"#;

const PAGE_SRC: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Document Triage Console</title>
  <link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css">
</head>
<body>
<div class="container py-4">
  <div id="notifications">{{{notifications}}}</div>
  <div class="row">
    <div class="col-lg-7">
      <form method="post" action="/submit" enctype="multipart/form-data" class="mb-4">
        <div class="mb-3">
          <label for="file" class="form-label">Upload File</label>
          <input type="file" class="form-control" id="file" name="file" accept=".pdf,.json,.eml,.txt">
        </div>
        <div class="mb-3">
          <label for="text_input" class="form-label">Or Paste Content</label>
          <textarea class="form-control" id="text_input" name="text_input" rows="8">{{form.text}}</textarea>
        </div>
        <div class="mb-3">
          <label for="input_type" class="form-label">Input Type</label>
          <select class="form-select" id="input_type" name="input_type">
            {{#each form.options}}<option value="{{value}}"{{#if selected}} selected{{/if}}>{{label}}</option>
            {{/each}}
          </select>
        </div>
        <button type="submit" class="btn btn-primary">Process Input</button>
        <span class="ms-3">Samples:
          <a href="/?sample=email">Email</a>
          <a href="/?sample=invoice">Invoice</a>
          <a href="/?sample=policy">Policy</a>
        </span>
      </form>
      <div id="results">{{{results}}}</div>
      <div id="trace-detail">{{{detail}}}</div>
    </div>
    <div class="col-lg-5">
      <h5>Processing History</h5>
      <div id="history">{{{history}}}</div>
    </div>
  </div>
</div>
</body>
</html>
"#;
