use super::locale::Locale;

/// Approximate word ceiling requested from the narrator.
pub const WORD_CEILING: usize = 200;

/// Why a narrative fell back to static text instead of generated output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FallbackReason {
    Unconfigured,
    ClientUnavailable,
    UpstreamFailed,
    EmptyResponse,
    TimedOut,
}

pub(crate) fn system_instruction(locale: Locale) -> String {
    match locale {
        Locale::English => format!(
            "You are a helpful assistant for Indian farmers. You will receive structured \
             eligibility results for government schemes. Your job is to explain the results in \
             simple, conversational English. Be warm and clear. Do NOT decide or change \
             eligibility and do not add or remove any scheme; only explain what is given. Format \
             your response as: (1) Short greeting (1 line), (2) Bullet list of eligible schemes \
             with one-line reason per scheme, (3) Encouraging closing line. Keep it concise (max \
             {WORD_CEILING} words)."
        ),
        Locale::Hindi => format!(
            "You are a helpful assistant for Indian farmers. You will receive structured \
             eligibility results for government schemes. Your job is to explain the results in \
             simple, conversational Hindi (हिंदी). Write ONLY in Hindi using Devanagari script. \
             Be warm and clear. Do NOT decide or change eligibility and do not add or remove any \
             scheme; only explain what is given. Format your response as: (1) Short greeting (1 \
             line), (2) Bullet list of eligible schemes with one-line reason per scheme, (3) \
             Encouraging closing line. Keep it concise (max {WORD_CEILING} words). Use simple \
             Hindi words that farmers can understand."
        ),
    }
}

pub(crate) fn user_message(locale: Locale, context: &str) -> String {
    match locale {
        Locale::English => format!(
            "Based ONLY on the following structured eligibility results, write a short, friendly \
             explanation for the farmer in English. Do not add or remove any scheme's \
             eligibility.\n\n{context}"
        ),
        Locale::Hindi => format!(
            "नीचे दिए गए योग्यता परिणामों के आधार पर, किसान के लिए एक छोटा, मित्रतापूर्ण हिंदी में \
             व्याख्या लिखें। किसी योजना की योग्यता को जोड़ें या हटाएं नहीं। केवल हिंदी में लिखें।\n\n{context}"
        ),
    }
}

/// Static narrative returned when generation is not possible.
pub fn fallback_text(locale: Locale, reason: FallbackReason) -> &'static str {
    match (locale, reason) {
        (Locale::English, FallbackReason::Unconfigured) => {
            "AI explanation is not available right now. Your eligibility results above are complete."
        }
        (Locale::English, FallbackReason::EmptyResponse) => {
            "Explanation could not be generated. Your eligibility results above are complete."
        }
        (
            Locale::English,
            FallbackReason::ClientUnavailable
            | FallbackReason::UpstreamFailed
            | FallbackReason::TimedOut,
        ) => {
            "We could not load the explanation. Your eligibility results above are complete; please try again later."
        }
        (Locale::Hindi, FallbackReason::Unconfigured) => {
            "AI व्याख्या अभी उपलब्ध नहीं है। ऊपर दिए गए योग्यता परिणाम पूरे हैं।"
        }
        (Locale::Hindi, FallbackReason::EmptyResponse) => {
            "व्याख्या उपलब्ध नहीं है। ऊपर दिए गए योग्यता परिणाम पूरे हैं।"
        }
        (
            Locale::Hindi,
            FallbackReason::ClientUnavailable
            | FallbackReason::UpstreamFailed
            | FallbackReason::TimedOut,
        ) => {
            "व्याख्या लोड करने में त्रुटि हुई। ऊपर दिए गए योग्यता परिणाम पूरे हैं, कृपया बाद में पुनः प्रयास करें।"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REASONS: [FallbackReason; 5] = [
        FallbackReason::Unconfigured,
        FallbackReason::ClientUnavailable,
        FallbackReason::UpstreamFailed,
        FallbackReason::EmptyResponse,
        FallbackReason::TimedOut,
    ];

    #[test]
    fn every_fallback_is_non_empty_and_localized() {
        for reason in REASONS {
            let english = fallback_text(Locale::English, reason);
            let hindi = fallback_text(Locale::Hindi, reason);
            assert!(!english.trim().is_empty());
            assert!(!hindi.trim().is_empty());
            assert_ne!(english, hindi);
        }
    }

    #[test]
    fn instructions_forbid_changing_eligibility() {
        for locale in Locale::ALL {
            let instruction = system_instruction(locale);
            assert!(instruction.contains("Do NOT decide or change eligibility"));
            assert!(instruction.contains(&WORD_CEILING.to_string()));
        }
        assert!(system_instruction(Locale::Hindi).contains("Devanagari"));
    }

    #[test]
    fn user_message_embeds_context() {
        let message = user_message(Locale::English, "TOP RECOMMENDED SCHEMES:");
        assert!(message.ends_with("\n\nTOP RECOMMENDED SCHEMES:"));
    }
}
