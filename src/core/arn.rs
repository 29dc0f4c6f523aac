//! Username derivation from identity ARNs.

/// Derive the username from an ARN.
///
/// Takes the segment after the last `/`, or after the last `:` when the ARN
/// has no `/`. If that segment is empty the whole ARN is used, so the
/// result is never empty for a non-empty ARN.
///
/// ```
/// use iamgate::core::arn::username_from_arn;
///
/// assert_eq!(username_from_arn("arn:aws:iam::123456789012:user/alice"), "alice");
/// assert_eq!(username_from_arn("arn:aws:iam::123456789012:alice"), "alice");
/// ```
pub fn username_from_arn(arn: &str) -> &str {
    let separator = if arn.contains('/') { '/' } else { ':' };
    match arn.rsplit(separator).next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => arn,
    }
}
