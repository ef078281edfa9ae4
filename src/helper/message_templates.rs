use crate::helper::{require, HelperError};
use crate::models::generator_models::{WhatsAppMessages, WhatsAppRequest};

pub const OCCASIONS: [&str; 3] = ["Festival Greeting", "Event Invite", "General Update"];
pub const LANGUAGES: [&str; 2] = ["English", "Marathi"];
pub const TONES: [&str; 3] = ["Formal", "Casual", "Inspirational"];

pub const VOTER_NAME_TOKEN: &str = "{voter_name}";

pub const DEFAULT_MESSAGE: &str =
    "Dear {voter_name}, thank you for your continued support and engagement with our community initiatives.";

const SHORT_LIMIT: usize = 100;
const SUPPORT_PARAGRAPH: &str = "\n\nWe appreciate your continued support and look forward to serving our community together. Please feel free to reach out with any questions or suggestions.";

// (occasion, language, tone, template)
const MESSAGE_TEMPLATES: &[(&str, &str, &str, &str)] = &[
    ("Festival Greeting", "English", "Formal", "We extend our warmest wishes to you and your family on this auspicious occasion. {voter_name}, may this festival bring prosperity and happiness to your home."),
    ("Festival Greeting", "English", "Casual", "Hey {voter_name}! 🎉 Hope you're having an amazing celebration with your loved ones. Wishing you all the best!"),
    ("Festival Greeting", "English", "Inspirational", "Dear {voter_name}, as we celebrate this beautiful festival, let's remember that unity and joy make our community stronger. May this occasion inspire us all!"),
    ("Festival Greeting", "Marathi", "Formal", "या शुभ अवसरावर आपल्या आणि आपल्या कुटुंबाला मनापासून शुभेच्छा. {voter_name}, हा सण आपल्या घरात समृद्धी आणि आनंद आणो."),
    ("Festival Greeting", "Marathi", "Casual", "अरे {voter_name}! 🎉 तुमचा सण कसा जात आहे? खूप आनंद करा आणि मिठाई खा!"),
    ("Festival Greeting", "Marathi", "Inspirational", "प्रिय {voter_name}, या सुंदर सणाच्या निमित्ताने आपण सगळे मिळून आपल्या समाजाला मजबूत बनवूया!"),
    ("Event Invite", "English", "Formal", "Dear {voter_name}, You are cordially invited to attend our upcoming community event. Your presence would be highly valued."),
    ("Event Invite", "English", "Casual", "Hi {voter_name}! 👋 Got an awesome event coming up - would love to see you there!"),
    ("Event Invite", "English", "Inspirational", "Join us, {voter_name}, as we come together to build a better tomorrow for our community!"),
    ("Event Invite", "Marathi", "Formal", "आदरणीय {voter_name}, आपल्याला आमच्या येत्या सामुदायिक कार्यक्रमास उपस्थित राहण्यासाठी आमंत्रित करतो."),
    ("Event Invite", "Marathi", "Casual", "अरे {voter_name}! एक छान कार्यक्रम येत आहे - तुम्ही नक्की या!"),
    ("Event Invite", "Marathi", "Inspirational", "{voter_name}, आपल्या समाजाचे चांगले भविष्य घडवण्यासाठी आमच्यासोबत सामील व्हा!"),
    ("General Update", "English", "Formal", "Dear {voter_name}, We would like to update you on the recent developments in our community initiatives."),
    ("General Update", "English", "Casual", "Hey {voter_name}! Quick update on what's happening in our neighborhood 📢"),
    ("General Update", "English", "Inspirational", "{voter_name}, together we're making real progress! Here's what we've accomplished recently."),
    ("General Update", "Marathi", "Formal", "आदरणीय {voter_name}, आमच्या सामुदायिक उपक्रमांमधील अलीकडील घडामोडींची माहिती देत आहोत."),
    ("General Update", "Marathi", "Casual", "अरे {voter_name}! आमच्या परिसरात काय चालू आहे ते सांगतो 📢"),
    ("General Update", "Marathi", "Inspirational", "{voter_name}, आपण सगळे मिळून खरोखर प्रगती करत आहोत! पाहा आपण काय साध्य केले आहे."),
];

const FESTIVAL_REPLY: &str = "Thank you for your festival wishes, {voter_name}! May this season bring joy and prosperity to you and your family.";
const COMMUNITY_REPLY: &str = "Thank you for caring about our community, {voter_name}. Your ideas guide the work we do in the neighborhood, and we would love to hear more.";
const HELP_REPLY: &str = "Thank you for reaching out, {voter_name}. Our team is here to help. Please share the details and a volunteer from our office will contact you shortly.";

// (tone, generic reply)
const GENERIC_REPLIES: &[(&str, &str)] = &[
    ("Formal", "Dear {voter_name}, thank you for your message. We value your feedback and will respond to your concerns promptly."),
    ("Casual", "Hey {voter_name}! Thanks for the message, we really appreciate you getting in touch!"),
    ("Inspirational", "{voter_name}, your message reminds us why we do this work. Together, we will keep building a better future for everyone."),
];

fn exact(occasion: &str, language: &str, tone: &str) -> Option<&'static str> {
    MESSAGE_TEMPLATES
        .iter()
        .find(|(o, l, t, _)| *o == occasion && *l == language && *t == tone)
        .map(|(_, _, _, template)| *template)
}

/// Template for (occasion, language, tone), falling back to the Formal tone,
/// then to the English general update in the same tone, then to a fixed default.
pub fn lookup(occasion: &str, language: &str, tone: &str) -> &'static str {
    exact(occasion, language, tone)
        .or_else(|| exact(occasion, language, "Formal"))
        .or_else(|| exact("General Update", "English", tone))
        .unwrap_or(DEFAULT_MESSAGE)
}

/// Reply to free text from a voter. Keywords are checked in order: festival, community, help.
pub fn reply_to_voter(voter_message: &str, tone: &str) -> &'static str {
    let lowered = voter_message.to_lowercase();
    if lowered.contains("festival") {
        FESTIVAL_REPLY
    } else if lowered.contains("community") {
        COMMUNITY_REPLY
    } else if lowered.contains("help") {
        HELP_REPLY
    } else {
        GENERIC_REPLIES
            .iter()
            .find(|(t, _)| *t == tone)
            .or_else(|| GENERIC_REPLIES.iter().find(|(t, _)| *t == "Formal"))
            .map(|(_, reply)| *reply)
            .unwrap_or(DEFAULT_MESSAGE)
    }
}

/// Replaces the voter name token. Without a name the token stays for manual editing.
pub fn interpolate(template: &str, voter_name: Option<&str>) -> String {
    match voter_name.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => template.replace(VOTER_NAME_TOKEN, name),
        None => template.to_string(),
    }
}

/// At most 100 characters; longer text is cut to 97 characters plus an ellipsis.
pub fn short_version(text: &str) -> String {
    if text.chars().count() > SHORT_LIMIT {
        let mut short: String = text.chars().take(SHORT_LIMIT - 3).collect();
        short.push_str("...");
        short
    } else {
        text.to_string()
    }
}

pub fn long_version(text: &str) -> String {
    format!("{}{}", text, SUPPORT_PARAGRAPH)
}

pub fn generate_whatsapp(request: &WhatsAppRequest) -> Result<WhatsAppMessages, HelperError> {
    if request.occasion.trim().is_empty() || request.language.trim().is_empty() || request.tone.trim().is_empty() {
        return Err(HelperError::validation("Please select all options before generating"));
    }

    let template = match request.voter_message.as_deref().map(str::trim) {
        Some(message) if !message.is_empty() => reply_to_voter(message, request.tone.trim()),
        _ => lookup(request.occasion.trim(), request.language.trim(), request.tone.trim()),
    };
    let base = interpolate(template, request.voter_name.as_deref());

    Ok(WhatsAppMessages {
        short: short_version(&base),
        long: long_version(&base),
    })
}

/// Checks that a message saved to the library carries text.
pub fn validate_library_text(text: &str) -> Result<(), HelperError> {
    require(text, "Message text")
}
