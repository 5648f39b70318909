/// Attached to every normal (scored) result.
pub const LEGAL_DISCLAIMER: &str = "\
IMPORTANT MEDICAL DISCLAIMER

This tool is for informational and educational purposes only. It is not intended to be a substitute for professional medical advice, diagnosis, or treatment.

\u{2022} This tool does not provide medical diagnoses
\u{2022} Results are based solely on the information you provide
\u{2022} Headaches can have many causes, some serious
\u{2022} Always seek the advice of a qualified healthcare provider with any questions about a medical condition
\u{2022} Never disregard professional medical advice or delay seeking it because of something you read here
\u{2022} If you think you may have a medical emergency, call your doctor or emergency services immediately

By using this tool, you acknowledge that you understand and agree to these terms.";

/// Attached to every emergency (red-flag) result.
pub const RED_FLAG_WARNING: &str = "\
SEEK IMMEDIATE MEDICAL ATTENTION

Based on your responses, you may be experiencing symptoms that require urgent medical evaluation.

Please contact emergency services (911) or go to your nearest emergency room if you are experiencing:
\u{2022} The worst headache of your life with sudden onset
\u{2022} Headache with fever and stiff neck
\u{2022} Headache with confusion, weakness, vision changes, or difficulty speaking
\u{2022} Headache following head injury

This is not a diagnosis. These symptoms can have many causes, but they should be evaluated by a medical professional promptly to rule out serious conditions.";
