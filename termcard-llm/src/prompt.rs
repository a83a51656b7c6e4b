//! Prompt and schema for term card generation.
//!
//! The instruction text, the `term_card` schema and the sampling temperature
//! are fixed; only the model and the user's term vary between requests.

use serde_json::{Value, json};
use termcard_core::TermRequest;
use termcard_core::types::TERM_CARD_FIELDS;

use crate::types::{InputMessage, ResponsesRequest, Role, TextConfig, TextFormat};

/// System instruction: correct the spelling, answer with exactly four JSON
/// fields, keep the description short and in Arabic, write nothing outside JSON.
pub const TERM_CARD_SYSTEM: &str = "أنت مساعد مصطلحات.
المطلوب: تعطي 4 حقول فقط بصيغة JSON صحيحة:
- english: الاسم الإنجليزي المصحح/الأنسب
- pronunciation_ar: نطق تقريبي بالحروف العربية للاسم الإنجليزي
- arabic: الترجمة/المقابل العربي الأنسب (إن وجد)
- description_ar: وصف عربي قصير وواضح (سطر أو سطرين). بدون تفاصيل طويلة.

قواعد:
- صحح الأخطاء الإملائية في المصطلح قبل الإجابة.
- الوصف والشرح عربي فقط (هنا وصف قصير فقط).
- لا تكتب أي كلام خارج JSON.";

/// Name the schema is registered under upstream.
pub const SCHEMA_NAME: &str = "term_card";

/// Low temperature keeps the output literal.
pub const TEMPERATURE: f64 = 0.2;

/// The `term_card` JSON schema: four required strings, nothing else.
#[must_use]
pub fn term_card_schema() -> Value {
    let properties: serde_json::Map<String, Value> = TERM_CARD_FIELDS
        .iter()
        .map(|field| ((*field).to_string(), json!({ "type": "string" })))
        .collect();

    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": properties,
        "required": TERM_CARD_FIELDS,
    })
}

/// Build the full upstream request for one term.
#[must_use]
pub fn build_request(model: &str, request: &TermRequest) -> ResponsesRequest {
    ResponsesRequest {
        model: model.to_string(),
        input: vec![
            InputMessage::text(Role::System, TERM_CARD_SYSTEM),
            InputMessage::text(Role::User, request.term()),
        ],
        text: TextConfig {
            format: TextFormat::JsonSchema {
                name: SCHEMA_NAME.to_string(),
                strict: true,
                schema: term_card_schema(),
            },
        },
        temperature: TEMPERATURE,
    }
}
