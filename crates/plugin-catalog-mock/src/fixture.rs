//! Sample catalog content served by the mock.

use std::sync::{Arc, LazyLock};

use catalog_core::{AppError, AppResult};

use crate::error::MockError;
use crate::tree::{CatalogTree, ResourceNode};

/// Built once, shared by every plugin instance.
static SAMPLE_TREE: LazyLock<Result<Arc<CatalogTree>, String>> =
    LazyLock::new(|| build_sample_tree().map(Arc::new).map_err(|e| e.to_string()));

/// The shared sample catalog.
pub fn sample_tree() -> AppResult<Arc<CatalogTree>> {
    match &*SAMPLE_TREE {
        Ok(tree) => Ok(Arc::clone(tree)),
        Err(message) => Err(AppError::internal(format!(
            "Sample catalog is invalid: {message}"
        ))),
    }
}

/// Two root categories, with folders nested up to three levels deep.
pub fn build_sample_tree() -> Result<CatalogTree, MockError> {
    const GEO: &str = "category-geospatial";
    const TRANSPORT: &str = "category-geospatial/transport";
    const CYCLING: &str = "category-geospatial/transport/cycling";
    const DEMO: &str = "category-demographic";

    CatalogTree::builder()
        .root(GEO, "Données géospatiales")
        .folder(GEO, TRANSPORT, "Transports et mobilité")
        .folder(TRANSPORT, CYCLING, "Mobilités douces")
        .root(DEMO, "Données démographiques")
        .resource(
            GEO,
            ResourceNode::new(
                "category-geospatial/resource-cadastre",
                "Plan cadastral informatisé",
                "geojson",
            )
            .description(
                "Parcelles cadastrales de la commune, mises à jour chaque trimestre.",
            )
            .mime_type("application/geo+json")
            .origin("https://catalog.example.com/datasets/cadastre")
            .size(48_213_776),
        )
        .resource(
            TRANSPORT,
            ResourceNode::new(
                "category-geospatial/transport/resource-bus-stops",
                "Arrêts de bus",
                "csv",
            )
            .description("Position et nom de tous les arrêts du réseau urbain.")
            .mime_type("text/csv")
            .origin("https://catalog.example.com/datasets/bus-stops")
            .size(312_544),
        )
        .resource(
            TRANSPORT,
            ResourceNode::new(
                "category-geospatial/transport/resource-traffic-counts",
                "Comptages routiers",
                "csv",
            )
            .description("Trafic journalier moyen relevé par les boucles de comptage.")
            .mime_type("text/csv")
            .origin("https://catalog.example.com/datasets/traffic-counts")
            .size(2_087_115),
        )
        .resource(
            CYCLING,
            ResourceNode::new(
                "category-geospatial/transport/cycling/resource-bike-lanes",
                "Aménagements cyclables",
                "geojson",
            )
            .description("Pistes et bandes cyclables, avec leur type et leur sens.")
            .mime_type("application/geo+json")
            .origin("https://catalog.example.com/datasets/bike-lanes")
            .size(5_402_019),
        )
        .resource(
            DEMO,
            ResourceNode::new(
                "category-demographic/resource-population-2023",
                "Population par commune 2023",
                "csv",
            )
            .description("Population municipale et totale par commune au 1er janvier 2023.")
            .mime_type("text/csv")
            .origin("https://catalog.example.com/datasets/population-2023")
            .size(1_234_567),
        )
        .resource(
            DEMO,
            ResourceNode::new(
                "category-demographic/resource-births",
                "Naissances domiciliées",
                "csv",
            )
            .description("Nombre de naissances par commune de résidence de la mère.")
            .mime_type("text/csv")
            .origin("https://catalog.example.com/datasets/births")
            .size(845_310),
        )
        .resource(
            DEMO,
            ResourceNode::new(
                "category-demographic/resource-age-pyramid",
                "Pyramide des âges",
                "xlsx",
            )
            .description("Répartition de la population par tranche d'âge et par sexe.")
            .mime_type("application/vnd.openxmlformats-officedocument.spreadsheetml.sheet")
            .origin("https://catalog.example.com/datasets/age-pyramid")
            .size(97_402),
        )
        .build()
}
