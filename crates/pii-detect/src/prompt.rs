//! Extraction prompt for generative detectors

/// Entity kinds the model is asked to look for, with a short hint each.
pub const KNOWN_KINDS: &[(&str, &str)] = &[
    ("PERSON", "first and last names"),
    ("BIRTH_DATE", "date or year of birth"),
    ("BIRTH_PLACE", "place of birth"),
    ("ID_NUMBER", "national identity numbers"),
    ("MOTHER_MAIDEN_NAME", "mother's maiden name"),
    ("SIGNATURE", "handwritten or electronic signature references"),
    ("ADDRESS", "street or postal address"),
    ("ZIP_CODE", "postal code"),
    ("PHONE", "phone or mobile numbers"),
    ("EMAIL", "email addresses"),
    ("SOCIAL_HANDLE", "social media user names"),
    ("CREDIT_CARD", "payment card numbers"),
    ("IBAN", "IBAN account numbers"),
    ("BANK_ACCOUNT", "other bank account numbers"),
    ("TAX_NUMBER", "tax identifiers"),
    ("SSN", "social security numbers"),
    ("FINANCIAL_DOC", "invoice, receipt or statement numbers"),
    ("PASSPORT", "passport numbers"),
    ("DRIVER_LICENSE", "driving licence numbers"),
    ("LICENSE_PLATE", "vehicle plates"),
    ("STUDENT_EMPLOYEE_ID", "student, employee or customer numbers"),
    ("OTHER_ID", "ticket, application or other identifiers"),
    ("BIOMETRIC", "fingerprint, face, iris or voice data"),
    ("PHOTO", "photographs identifying a person"),
    ("VIDEO", "video recordings"),
    ("AUDIO", "voice recordings"),
    ("HEALTH", "illness, disability, allergy, treatment"),
    ("GENETIC", "genetic data"),
    ("SEX_LIFE", "sexual life or orientation"),
    ("CRIMINAL_CONVICTION", "convictions and security measures"),
    ("RACE_ETHNICITY", "race or ethnic origin"),
    ("RELIGION_SECT", "religion or sect"),
    ("POLITICAL_OPINION", "political opinions"),
    ("PHILOSOPHICAL_BELIEF", "philosophical beliefs"),
    ("UNION_ASSOC_MEMBERSHIP", "union, association or foundation membership"),
    ("CLOTHING", "clothing revealing belief or affiliation"),
    ("IP_ADDRESS", "IP addresses"),
    ("MAC_ADDRESS", "MAC addresses"),
    ("IMEI", "IMEI numbers"),
    ("GPS_COORDINATES", "latitude and longitude"),
    ("DEVICE_ID", "device or advertising identifiers"),
    ("GENDER", "gender or gender identity"),
    ("MARITAL_STATUS", "marital status, spouse, children"),
    ("HOBBIES_PREFERENCES", "hobbies and preferences"),
    ("AFFILIATIONS", "group or club memberships"),
    ("FAMILY", "information about family members"),
    ("CV_RESUME", "CVs and application documents"),
    ("OFFICIAL_DOC", "copies of identity documents"),
    ("REPORT", "evaluation, complaint or interview reports"),
    ("LETTER", "letters and correspondence"),
];

/// Build the extraction prompt for `text`.
pub fn build_prompt(text: &str) -> String {
    let mut prompt = String::from(
        "Find every piece of personal information (PII) in the text below and return it as JSON.\n\
         Use exactly this shape:\n\n\
         {\n  \"entities\": [\n    \
         {\"type\": \"PERSON\", \"value\": \"Jane Doe\", \"start\": 0, \"end\": 8, \"confidence\": 0.95}\n  ]\n}\n\n\
         `value` must be copied verbatim from the text. `start` and `end` are character offsets, end exclusive.\n\n\
         Entity types:\n",
    );

    for (kind, hint) in KNOWN_KINDS {
        prompt.push_str(&format!("- {}: {}\n", kind, hint));
    }

    prompt.push_str("\nText:\n");
    prompt.push_str(text);
    prompt.push_str("\n\nAnswer with the JSON object only.");
    prompt
}
