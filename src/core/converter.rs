use crate::core::numeral::{convert_to_old_roman, validate_arabic};
use crate::domain::model::ConversionResult;
use crate::domain::ports::ModernResolver;
use crate::utils::error::Result;

/// Produces both numeral dialects: the additive form locally, the subtractive
/// form through the injected resolver.
pub struct RomanConverter<R: ModernResolver> {
    resolver: R,
}

impl<R: ModernResolver> RomanConverter<R> {
    pub fn new(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    pub fn old(&self, value: i64) -> Result<String> {
        convert_to_old_roman(value)
    }

    /// Validates locally, then performs a single lookup. Failures are returned
    /// as-is; there is no retry.
    pub async fn modern(&self, value: i64) -> Result<String> {
        let value = validate_arabic(value)?;
        let numeral = self.resolver.resolve(value).await?;
        tracing::debug!("Resolved {} to {}", value, numeral);
        Ok(numeral)
    }

    pub async fn convert(&self, value: i64, with_modern: bool) -> Result<ConversionResult> {
        let arabic = validate_arabic(value)?;
        let old = convert_to_old_roman(value)?;

        let modern = if with_modern {
            Some(self.resolver.resolve(arabic).await?)
        } else {
            None
        };

        Ok(ConversionResult { arabic, old, modern })
    }
}
