/// One label/value row of a specification table.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpecItem {
    /// Row label.
    pub label: String,
    /// Row value.
    pub value: String,
}

/// A titled group of specification rows.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpecSection {
    /// Section heading.
    pub category: String,
    /// Rows in display order.
    pub items: Vec<SpecItem>,
}

/// The static specs page: header copy plus nested label/value tables.
/// Pure data with no computation.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpecsPage {
    /// Small uppercase line above the title.
    pub kicker: String,
    /// Page title.
    pub title: String,
    /// Intro paragraph.
    pub intro: String,
    /// Specification sections in display order.
    pub sections: Vec<SpecSection>,
    /// Closing call-to-action heading.
    pub cta_heading: String,
    /// Closing call-to-action body.
    pub cta_body: String,
    /// Fine-print disclaimer.
    pub disclaimer: String,
}

fn section(category: &str, items: &[(&str, &str)]) -> SpecSection {
    SpecSection {
        category: category.to_string(),
        items: items
            .iter()
            .map(|(label, value)| SpecItem {
                label: (*label).to_string(),
                value: (*value).to_string(),
            })
            .collect(),
    }
}

/// The NeuralCore X1 specification tables.
pub fn specs_page() -> SpecsPage {
    SpecsPage {
        kicker: "Technical Details".to_string(),
        title: "NeuralCore X1 Specifications".to_string(),
        intro: "Built on cutting-edge 3nm technology, the NeuralCore X1 delivers \
                unprecedented AI performance for enterprise workloads."
            .to_string(),
        sections: vec![
            section(
                "Processing",
                &[
                    ("Parameters", "256 Billion"),
                    ("Tensor Cores", "16,384"),
                    ("CUDA Cores", "32,768"),
                    ("Clock Speed", "2.1 GHz (Base) / 3.2 GHz (Boost)"),
                    ("FP16 Performance", "1.8 PFLOPS"),
                    ("FP32 Performance", "920 TFLOPS"),
                    ("INT8 Performance", "3.6 PFLOPS"),
                ],
            ),
            section(
                "Memory",
                &[
                    ("Memory Type", "HBM3e"),
                    ("Memory Capacity", "1 TB"),
                    ("Memory Bandwidth", "8 TB/s"),
                    ("L2 Cache", "256 MB"),
                    ("Memory Interface", "8192-bit"),
                ],
            ),
            section(
                "Connectivity",
                &[
                    ("Interconnect", "NeuralLink 5.0"),
                    ("NeuralLink Bandwidth", "1.8 TB/s (bidirectional)"),
                    ("PCIe", "Gen 6 x16"),
                    ("Max GPUs per Node", "8"),
                    ("Network", "400 Gbps Ethernet"),
                ],
            ),
            section(
                "Power & Thermal",
                &[
                    ("TDP", "700W"),
                    ("Max Power", "900W"),
                    ("Cooling", "Liquid Cooling Required"),
                    ("Max Junction Temp", "95°C"),
                ],
            ),
            section(
                "Physical",
                &[
                    ("Process Node", "3nm"),
                    ("Transistor Count", "280 Billion"),
                    ("Die Size", "814 mm²"),
                    ("Form Factor", "SXM6"),
                ],
            ),
            section(
                "Software Support",
                &[
                    ("AI Frameworks", "PyTorch, TensorFlow, JAX"),
                    (
                        "Precision Support",
                        "FP64, FP32, TF32, FP16, BF16, FP8, INT8",
                    ),
                    ("SDK", "NeuralCore SDK 2.0"),
                    ("Virtualization", "MIG (Multi-Instance GPU)"),
                ],
            ),
        ],
        cta_heading: "Ready to Get Started?".to_string(),
        cta_body: "Contact our sales team to discuss your AI infrastructure needs and \
                   get a custom quote for NeuralCore X1."
            .to_string(),
        disclaimer: "* All specifications are for demonstration purposes only. \
                     NeuralCore X1 is a fictional product."
            .to_string(),
    }
}
