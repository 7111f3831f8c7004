use crate::site::routes::Route;

/// A navigation action rendered as a button or link.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PageAction {
    /// Visible label.
    pub label: String,
    /// Destination route.
    pub route: Route,
}

/// One highlight card in the home footer grid.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Highlight {
    /// Small uppercase line above the heading.
    pub kicker: String,
    /// Card heading.
    pub heading: String,
    /// Card body line.
    pub detail: String,
}

/// Static copy of the home page outside the showcase itself.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HomePage {
    /// Footer section heading.
    pub footer_heading: String,
    /// Footer section body.
    pub footer_body: String,
    /// Actions under the footer heading, in display order.
    pub actions: Vec<PageAction>,
    /// Highlight cards, in display order.
    pub highlights: Vec<Highlight>,
    /// Fine-print note at the very bottom.
    pub footer_note: String,
}

/// Static copy of the contact page around the form.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactPage {
    /// Small uppercase line above the title.
    pub kicker: String,
    /// Page title.
    pub title: String,
    /// Intro paragraph.
    pub intro: String,
    /// Acknowledgment heading after submission.
    pub thanks_heading: String,
    /// Acknowledgment body after submission.
    pub thanks_body: String,
}

/// Home page copy for the NeuralCore X1 site.
pub fn home_page() -> HomePage {
    HomePage {
        footer_heading: "Ready to Transform Your AI Infrastructure?".to_string(),
        footer_body: "Join the next generation of AI pioneers. NeuralCore X1 is designed \
                      for those who refuse to compromise on performance."
            .to_string(),
        actions: vec![
            PageAction {
                label: "Request Demo".to_string(),
                route: Route::Contact,
            },
            PageAction {
                label: "View Specs".to_string(),
                route: Route::Specs,
            },
        ],
        highlights: vec![
            Highlight {
                kicker: "Performance".to_string(),
                heading: "10x Faster".to_string(),
                detail: "Than previous generation chips".to_string(),
            },
            Highlight {
                kicker: "Efficiency".to_string(),
                heading: "50% Less".to_string(),
                detail: "Power consumption per operation".to_string(),
            },
            Highlight {
                kicker: "Memory".to_string(),
                heading: "1TB HBM3".to_string(),
                detail: "High bandwidth memory included".to_string(),
            },
        ],
        footer_note: "NeuralCore X1. A fictional product demo.".to_string(),
    }
}

/// Contact page copy for the NeuralCore X1 site.
pub fn contact_page() -> ContactPage {
    ContactPage {
        kicker: "Request a Demo".to_string(),
        title: "Contact Us".to_string(),
        intro: "Get in touch with our team to learn more about NeuralCore X1.".to_string(),
        thanks_heading: "Thank You!".to_string(),
        thanks_body: "We've received your message and will get back to you shortly.".to_string(),
    }
}
