/// Region used when the function ARN carries none.
pub const DEFAULT_REGION: &str = "us-east-1";

const LAMBDA_ARN_PREFIX: &str = "arn:aws:lambda:";

/// Extract the region from a Lambda function ARN.
///
/// ARN format: `arn:aws:lambda:<region>:<account-id>:function:<name>`.
/// The first occurrence of the prefix followed by a non-empty,
/// colon-terminated segment wins.
pub fn region_from_arn(arn: &str) -> &str {
    arn.match_indices(LAMBDA_ARN_PREFIX)
        .filter_map(|(start, _)| arn[start + LAMBDA_ARN_PREFIX.len()..].split_once(':'))
        .map(|(region, _)| region)
        .find(|region| !region.is_empty())
        .unwrap_or(DEFAULT_REGION)
}
