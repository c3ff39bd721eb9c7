use super::pattern::BlockFilePattern;

pub const GRC_YAML_SUFFIX: &str = ".block.yml";
const XML_SUFFIX: &str = ".xml";

// Definition filenames carry a `<module>_` prefix; it is stripped
// positionally (module name length + 1), matching how the scaffold tool
// generates the files.
fn strip_module_prefix(stem: &str, module_name_len: usize) -> String {
    stem.get(module_name_len + 1..).unwrap_or_default().to_string()
}

/// `grc/<module>_<block>.block.yml` flowgraph definitions.
pub struct GrcYamlPattern {
    module_name_len: usize,
}

impl GrcYamlPattern {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name_len: module_name.len(),
        }
    }
}

impl BlockFilePattern for GrcYamlPattern {
    fn matches(&self, file_name: &str) -> bool {
        file_name.ends_with(GRC_YAML_SUFFIX)
    }

    fn block_name(&self, file_name: &str) -> String {
        let stem = &file_name[..file_name.len() - GRC_YAML_SUFFIX.len()];
        strip_module_prefix(stem, self.module_name_len)
    }
}

/// `grc/<module>_<block>.xml` legacy markup definitions, kept around as
/// migration candidates only.
pub struct GrcXmlPattern {
    module_name_len: usize,
}

impl GrcXmlPattern {
    pub fn new(module_name: &str) -> Self {
        Self {
            module_name_len: module_name.len(),
        }
    }
}

impl BlockFilePattern for GrcXmlPattern {
    fn matches(&self, file_name: &str) -> bool {
        std::path::Path::new(file_name)
            .extension()
            .is_some_and(|ext| ext == "xml")
    }

    fn block_name(&self, file_name: &str) -> String {
        let stem = &file_name[..file_name.len() - XML_SUFFIX.len()];
        strip_module_prefix(stem, self.module_name_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_round_trip() {
        let pattern = GrcYamlPattern::new("audio");
        assert!(pattern.matches("audio_fir.block.yml"));
        assert_eq!(pattern.block_name("audio_fir.block.yml"), "fir");
    }

    #[test]
    fn test_yaml_rejects_other_files() {
        let pattern = GrcYamlPattern::new("audio");
        assert!(!pattern.matches("audio_fir.xml"));
        assert!(!pattern.matches("audio_fir.yml"));
        assert!(!pattern.matches("CMakeLists.txt"));
    }

    #[test]
    fn test_xml_round_trip() {
        let pattern = GrcXmlPattern::new("audio");
        assert!(pattern.matches("audio_fir.xml"));
        assert_eq!(pattern.block_name("audio_fir.xml"), "fir");
        assert!(!pattern.matches("audio_fir.block.yml"));
    }

    #[test]
    fn test_prefix_shorter_than_module_name() {
        // A stray file without the module prefix degrades to an empty
        // name instead of panicking.
        let pattern = GrcYamlPattern::new("longmodulename");
        assert_eq!(pattern.block_name("x.block.yml"), "");
    }
}
