fn sanitize_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut prev_sep = false;
    for ch in value.chars() {
        if ch.is_whitespace() {
            if !out.is_empty() && !prev_sep {
                out.push('_');
                prev_sep = true;
            }
        } else if !ch.is_control() {
            out.push(ch);
            prev_sep = false;
        }
    }
    let trimmed = out.trim_matches('_');
    if trimmed.is_empty() {
        "na".to_string()
    } else {
        trimmed.to_string()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct WarnEvent<'a> {
    pub code: &'a str,
    pub stage: &'a str,
    pub action: &'a str,
    pub source: &'a str,
    pub reason: &'a str,
    pub err: &'a str,
}

pub fn format_line(event: WarnEvent<'_>) -> String {
    format!(
        "STATS_WARN code={} stage={} action={} source={} reason={} err={}",
        sanitize_value(event.code),
        sanitize_value(event.stage),
        sanitize_value(event.action),
        sanitize_value(event.source),
        sanitize_value(event.reason),
        sanitize_value(event.err),
    )
}

pub fn emit(event: WarnEvent<'_>) {
    eprintln!("{}", format_line(event));
}

#[cfg(test)]
mod tests {
    use super::{WarnEvent, format_line, sanitize_value};

    #[test]
    fn sanitize_value_collapses_whitespace_runs() {
        assert_eq!(sanitize_value("expected value\n  at line 1"), "expected_value_at_line_1");
    }

    #[test]
    fn sanitize_value_falls_back_for_empty() {
        assert_eq!(sanitize_value(" \t "), "na");
    }

    #[test]
    fn format_line_keeps_field_order() {
        let line = format_line(WarnEvent {
            code: "INPUT_CORRUPT",
            stage: "load",
            action: "parse-document",
            source: "data/stats.json",
            reason: "json-parse-failed",
            err: "",
        });
        assert_eq!(
            line,
            "STATS_WARN code=INPUT_CORRUPT stage=load action=parse-document source=data/stats.json reason=json-parse-failed err=na"
        );
    }
}
