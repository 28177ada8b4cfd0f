#![no_main]

use libfuzzer_sys::fuzz_target;
use minilang::config::{CommentMode, FrontendConfig};
use minilang::{lexer, parser};

fuzz_target!(|data: &[u8]| {
    let Ok(source) = std::str::from_utf8(data) else {
        return;
    };

    // Errors are fine; panics are not.
    if let Ok(tokens) = lexer::tokenize(source) {
        let _ = parser::parse(&tokens);
        let _ = parser::parse_expression(&tokens);
    }

    let config = FrontendConfig::new().with_comment_mode(CommentMode::MultiLine);
    let _ = minilang::parse_source_with_config(source, &config);
    let _ = minilang::parse_expression_source_with_config(source, &config);
});
