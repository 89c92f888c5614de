// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

//! The reference hierarchy, spelled out so tests do not depend on the
//! embedded TOML.

use atcs_core::{Dataset, Province, Regency};

pub fn regency(id: &str, name: &str, cctv: u32, online: u32, alerts: u32) -> Regency {
    Regency::new(id, name, cctv, online, alerts, format!("https://{id}.invalid/"))
}

pub fn semarang() -> Regency {
    Regency::new(
        "semarang",
        "Semarang",
        165,
        154,
        0,
        "https://pantausemar.semarangkota.go.id/?cctv_category_id=fc3ed271-787c-4191-a7dd-fc84314a9f71",
    )
}

pub fn pekalongan() -> Regency {
    Regency::new(
        "pekalongan",
        "Pekalongan",
        40,
        31,
        0,
        "https://cctv.pekalongankota.go.id/",
    )
}

pub fn wonosobo() -> Regency {
    Regency::new(
        "wonosobo",
        "Wonosobo",
        11,
        11,
        0,
        "https://cctv.wonosobokab.go.id/",
    )
}

pub fn gersik() -> Regency {
    Regency::new(
        "gersik",
        "Gersik",
        165,
        154,
        0,
        "https://cctvkanjeng.gresikkab.go.id/",
    )
}

pub fn kotawaringin_barat() -> Regency {
    Regency::new(
        "kotawaringin-barat",
        "Kotawaringin Barat",
        15,
        14,
        0,
        "https://cctv.kotawaringinbaratkab.go.id/",
    )
}

pub fn jawa_tengah() -> Province {
    Province::new(
        "jateng",
        "Jawa Tengah",
        vec![semarang(), pekalongan(), wonosobo()],
    )
}

pub fn jawa_timur() -> Province {
    Province::new("jatim", "Jawa Timur", vec![gersik()])
}

pub fn kalimantan() -> Province {
    Province::new("kalimantan", "Kalimantan", vec![kotawaringin_barat()])
}

/// Same content and order as the embedded dataset.
pub fn sample_dataset() -> Dataset {
    Dataset::new(vec![jawa_tengah(), jawa_timur(), kalimantan()])
}

/// A dataset with alerts and a province without regencies.
pub fn alerting_dataset() -> Dataset {
    Dataset::new(vec![
        Province::new(
            "banten",
            "Banten",
            vec![
                regency("serang", "Serang", 20, 18, 2),
                regency("cilegon", "Cilegon", 8, 8, 1),
            ],
        ),
        Province::new("papua", "Papua", vec![]),
    ])
}
