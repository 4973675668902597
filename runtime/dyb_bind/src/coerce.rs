//! Result type enforcement.

use dyb_ir::StringLookup;
use dyb_object::{result_type_mismatch, BindResult, ExpectedType, Value};

/// Check `value` against the site's expected result type.
///
/// Passes the value through unchanged when it matches. Otherwise fails with
/// `ResultTypeMismatch` naming the expected type and the value's runtime
/// type (`null` for `Value::Null`).
pub fn check_result<I: StringLookup>(value: Value, expected: ExpectedType, interner: &I) -> BindResult {
    if expected.accepts(&value) {
        return Ok(value);
    }
    Err(result_type_mismatch(
        &expected.describe(interner),
        &value.type_name_with_interner(interner),
    ))
}
