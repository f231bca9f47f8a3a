//! Reply service validation (endpoint URL, timeouts, generation knobs).

use crate::schema::LitvinovConfig;

use super::helpers::{validate_http_url, validate_non_blank, validate_range, validate_range_f64};

pub(crate) fn validate_endpoint(errors: &mut Vec<String>, config: &LitvinovConfig) {
    let ep = &config.service.endpoint;
    validate_http_url(errors, "service.endpoint.url", &ep.url);
    validate_range(errors, "service.endpoint.connect_timeout", ep.connect_timeout, 1, 120);
    validate_range(errors, "service.endpoint.request_timeout", ep.request_timeout, 1, 600);
}

pub(crate) fn validate_openai(errors: &mut Vec<String>, config: &LitvinovConfig) {
    let oa = &config.service.openai;
    validate_http_url(errors, "service.openai.base_url", &oa.base_url);
    validate_non_blank(errors, "service.openai.model", &oa.model);
    validate_range(errors, "service.openai.max_tokens", oa.max_tokens, 1, 16384);
    validate_range_f64(errors, "service.openai.temperature", oa.temperature, 0.0, 2.0);
    validate_range(errors, "service.openai.request_timeout", oa.request_timeout, 1, 600);
}
