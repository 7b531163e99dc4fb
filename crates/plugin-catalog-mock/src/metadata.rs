//! Static metadata and UI strings of the mock plugin.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use catalog_plugin::{Capability, LocaleText, PluginMetadata, PublicationAction};

/// Plugin identifier used for registration.
pub const PLUGIN_ID: &str = "catalog-mock";

/// Capabilities declared regardless of configuration.
pub const BASE_CAPABILITIES: [Capability; 4] = [
    Capability::Import,
    Capability::ImportConfig,
    Capability::PublishDataset,
    Capability::DeletePublication,
];

static I18N: LazyLock<BTreeMap<String, LocaleText>> = LazyLock::new(|| {
    let en = LocaleText {
        description: "This catalog allows testing the service by simulating a folder and file \
                      structure."
            .to_string(),
        action_labels: labels(&[
            (PublicationAction::CreateResource, "Create file"),
            (PublicationAction::ReplaceResource, "Replace file"),
        ]),
        action_buttons: labels(&[
            (PublicationAction::CreateResource, "Create file here"),
            (PublicationAction::ReplaceResource, "Replace file"),
        ]),
        step_titles: labels(&[(
            PublicationAction::ReplaceResource,
            "File to replace selection",
        )]),
    };
    let fr = LocaleText {
        description: "Ce catalogue permet de tester le service en simulant une arborescence de \
                      dossiers et de fichiers."
            .to_string(),
        action_labels: labels(&[
            (PublicationAction::CreateResource, "Créer un fichier"),
            (PublicationAction::ReplaceResource, "Remplacer un fichier"),
        ]),
        action_buttons: labels(&[
            (PublicationAction::CreateResource, "Créer le fichier ici"),
            (PublicationAction::ReplaceResource, "Remplacer le fichier"),
        ]),
        step_titles: labels(&[(
            PublicationAction::ReplaceResource,
            "Sélection du fichier à remplacer",
        )]),
    };
    BTreeMap::from([("en".to_string(), en), ("fr".to_string(), fr)])
});

fn labels(entries: &[(PublicationAction, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(action, text)| (action.as_str().to_string(), (*text).to_string()))
        .collect()
}

/// Metadata declaring `capabilities`.
pub fn plugin_metadata(capabilities: Vec<Capability>) -> PluginMetadata {
    PluginMetadata {
        id: PLUGIN_ID.to_string(),
        title: "Catalog Mock".to_string(),
        description: "Mock plugin for Data Fair Catalog".to_string(),
        thumbnail_path: "./resources/thumbnail.svg".to_string(),
        capabilities,
        i18n: I18N.clone(),
    }
}

/// Base capabilities plus `search` and `pagination` when enabled.
pub fn capabilities_for(search: bool, pagination: bool) -> Vec<Capability> {
    let mut capabilities = BASE_CAPABILITIES.to_vec();
    if search {
        capabilities.push(Capability::Search);
    }
    if pagination {
        capabilities.push(Capability::Pagination);
    }
    capabilities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_constants() {
        let metadata = plugin_metadata(BASE_CAPABILITIES.to_vec());
        assert_eq!(metadata.title, "Catalog Mock");
        assert!(metadata.supports(Capability::Import));
        assert!(metadata.supports(Capability::DeletePublication));
        assert!(!metadata.supports(Capability::Search));
    }

    #[test]
    fn test_i18n_languages() {
        let metadata = plugin_metadata(Vec::new());
        let en = &metadata.i18n["en"];
        let fr = &metadata.i18n["fr"];
        assert_eq!(en.action_labels["createResource"], "Create file");
        assert_eq!(en.step_titles["replaceResource"], "File to replace selection");
        assert_eq!(fr.action_buttons["createResource"], "Créer le fichier ici");
        assert!(fr.description.starts_with("Ce catalogue"));
    }

    #[test]
    fn test_capabilities_for_flags() {
        assert_eq!(capabilities_for(false, false), BASE_CAPABILITIES.to_vec());
        let all = capabilities_for(true, true);
        assert!(all.contains(&Capability::Search));
        assert!(all.contains(&Capability::Pagination));
    }
}
