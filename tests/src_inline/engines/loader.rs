use super::*;

use crate::engines::defs::{
    AdviceDef, DimensionDef, EngineKind, FieldDef, FinancialDef, Formula, Orientation,
    QuestionDef, Trigger, UrgentDef, builtin_engines,
};
use crate::model::bands::BandDef;

const FIELDS: &[FieldDef] = &[FieldDef {
    key: "alpha",
    min: 0.0,
    max: 100.0,
    required: true,
    integer: false,
}];

const DIMENSIONS: &[DimensionDef] = &[DimensionDef {
    key: "alpha_dim",
    label: "Alpha",
    field: Some("alpha"),
    weight: 1.0,
    inverted: false,
    target: 75.0,
    scale: Scale::Percent,
    action: "Raise alpha.",
}];

const BANDS: &[BandDef] = &[
    BandDef {
        label: "Low",
        low: 0.0,
    },
    BandDef {
        label: "High",
        low: 50.0,
    },
];

fn base_def() -> EngineDef {
    EngineDef {
        kind: EngineKind::ScaleReadiness,
        name: "Fixture",
        orientation: Orientation::Progress,
        fields: FIELDS,
        questions: &[],
        dimensions: DIMENSIONS,
        bands: BANDS,
        advice: &[],
        urgent: None,
        financial: None,
    }
}

fn expect_err(def: EngineDef) -> ConfigError {
    build_engine(&def, None).unwrap_err()
}

#[test]
fn test_all_builtin_tables_validate() {
    for def in builtin_engines() {
        Engine::new(def).unwrap();
    }
}

#[test]
fn test_base_fixture_validates() {
    build_engine(&base_def(), None).unwrap();
}

#[test]
fn test_weights_must_sum_to_one() {
    const HALF: &[DimensionDef] = &[DimensionDef {
        weight: 0.5,
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: HALF,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Dimensions { .. }));
    assert!(err.to_string().contains("sum to 0.5"));
}

#[test]
fn test_weight_zero_rejected() {
    const ZERO: &[DimensionDef] = &[DimensionDef {
        weight: 0.0,
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: ZERO,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Dimensions { .. }));
    assert!(err.to_string().contains("invalid weight"));
}

#[test]
fn test_duplicate_dimension_rejected() {
    const TWICE: &[DimensionDef] = &[
        DimensionDef {
            weight: 0.5,
            ..DIMENSIONS[0]
        },
        DimensionDef {
            weight: 0.5,
            ..DIMENSIONS[0]
        },
    ];
    let err = expect_err(EngineDef {
        dimensions: TWICE,
        ..base_def()
    });
    assert!(err.to_string().contains("duplicate dimension"));
}

#[test]
fn test_target_above_scale_rejected() {
    const FAR: &[DimensionDef] = &[DimensionDef {
        target: 101.0,
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: FAR,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Dimensions { .. }));
}

#[test]
fn test_zero_cap_rejected() {
    const CAPPED: &[DimensionDef] = &[DimensionDef {
        scale: Scale::PerUnitCap(0.0),
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: CAPPED,
        ..base_def()
    });
    assert!(err.to_string().contains("cap must be positive"));
}

#[test]
fn test_dimension_needs_a_source() {
    const FLOATING: &[DimensionDef] = &[DimensionDef {
        field: None,
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: FLOATING,
        ..base_def()
    });
    assert!(err.to_string().contains("no input source"));
}

#[test]
fn test_derived_dimension_needs_no_field() {
    const DERIVED: &[DimensionDef] = &[DimensionDef {
        field: None,
        scale: Scale::Derived(Formula::RoiStrength),
        ..DIMENSIONS[0]
    }];
    build_engine(
        &EngineDef {
            dimensions: DERIVED,
            ..base_def()
        },
        None,
    )
    .unwrap();
}

#[test]
fn test_unknown_field_reference_rejected() {
    const DANGLING: &[DimensionDef] = &[DimensionDef {
        field: Some("beta"),
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        dimensions: DANGLING,
        ..base_def()
    });
    assert!(err.to_string().contains("unknown field 'beta'"));
}

#[test]
fn test_duplicate_field_rejected() {
    const TWICE: &[FieldDef] = &[FIELDS[0], FIELDS[0]];
    let err = expect_err(EngineDef {
        fields: TWICE,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Fields { .. }));
}

#[test]
fn test_inverted_field_range_rejected() {
    const BACKWARD: &[FieldDef] = &[FieldDef {
        min: 100.0,
        max: 0.0,
        ..FIELDS[0]
    }];
    let err = expect_err(EngineDef {
        fields: BACKWARD,
        ..base_def()
    });
    assert!(err.to_string().contains("invalid range"));
}

#[test]
fn test_no_input_surface_rejected() {
    const DERIVED: &[DimensionDef] = &[DimensionDef {
        field: None,
        scale: Scale::Derived(Formula::RoiStrength),
        ..DIMENSIONS[0]
    }];
    let err = expect_err(EngineDef {
        fields: &[],
        dimensions: DERIVED,
        ..base_def()
    });
    assert!(err.to_string().contains("no input surface"));
}

#[test]
fn test_mixed_surface_rejected() {
    const QUESTIONS: &[QuestionDef] = &[QuestionDef {
        id: "q1",
        prompt: "Alpha looks healthy",
        dimension: "alpha_dim",
        weight: 1.0,
    }];
    let err = expect_err(EngineDef {
        questions: QUESTIONS,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Questions { .. }));
    assert!(err.to_string().contains("no flat fields"));
}

#[test]
fn test_question_weights_must_sum_per_dimension() {
    const QUESTIONS: &[QuestionDef] = &[
        QuestionDef {
            id: "q1",
            prompt: "One",
            dimension: "alpha_dim",
            weight: 0.5,
        },
        QuestionDef {
            id: "q2",
            prompt: "Two",
            dimension: "alpha_dim",
            weight: 0.3,
        },
    ];
    let err = expect_err(EngineDef {
        fields: &[],
        questions: QUESTIONS,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Questions { .. }));
    assert!(err.to_string().contains("expected 1.0"));
}

#[test]
fn test_question_unknown_dimension_rejected() {
    const QUESTIONS: &[QuestionDef] = &[QuestionDef {
        id: "q1",
        prompt: "One",
        dimension: "beta_dim",
        weight: 1.0,
    }];
    let err = expect_err(EngineDef {
        fields: &[],
        questions: QUESTIONS,
        ..base_def()
    });
    assert!(err.to_string().contains("unknown dimension 'beta_dim'"));
}

#[test]
fn test_dimension_without_questions_rejected() {
    const QUESTIONS: &[QuestionDef] = &[QuestionDef {
        id: "q1",
        prompt: "One",
        dimension: "alpha_dim",
        weight: 1.0,
    }];
    const TWO_DIMS: &[DimensionDef] = &[
        DimensionDef {
            weight: 0.5,
            ..DIMENSIONS[0]
        },
        DimensionDef {
            key: "beta_dim",
            label: "Beta",
            field: None,
            weight: 0.5,
            inverted: false,
            target: 75.0,
            scale: Scale::Percent,
            action: "Raise beta.",
        },
    ];
    let err = expect_err(EngineDef {
        fields: &[],
        questions: QUESTIONS,
        dimensions: TWO_DIMS,
        ..base_def()
    });
    assert!(err.to_string().contains("'beta_dim' has no questions"));
}

#[test]
fn test_first_band_must_start_at_zero() {
    const SHIFTED: &[BandDef] = &[
        BandDef {
            label: "Low",
            low: 10.0,
        },
        BandDef {
            label: "High",
            low: 50.0,
        },
    ];
    let err = expect_err(EngineDef {
        bands: SHIFTED,
        ..base_def()
    });
    assert!(err.to_string().contains("must start at 0"));
}

#[test]
fn test_band_thresholds_strictly_increase() {
    const FLAT: &[BandDef] = &[
        BandDef {
            label: "Low",
            low: 0.0,
        },
        BandDef {
            label: "Mid",
            low: 50.0,
        },
        BandDef {
            label: "High",
            low: 50.0,
        },
    ];
    let err = expect_err(EngineDef {
        bands: FLAT,
        ..base_def()
    });
    assert!(err.to_string().contains("strictly increasing at 'High'"));
}

#[test]
fn test_band_above_scale_rejected() {
    const TALL: &[BandDef] = &[
        BandDef {
            label: "Low",
            low: 0.0,
        },
        BandDef {
            label: "High",
            low: 101.0,
        },
    ];
    let err = expect_err(EngineDef {
        bands: TALL,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Bands { .. }));
}

#[test]
fn test_advice_must_reference_known_pairs() {
    const ADVICE: &[AdviceDef] = &[AdviceDef {
        dimension: "alpha_dim",
        band: "Gone",
        text: "Do something.",
    }];
    let err = expect_err(EngineDef {
        advice: ADVICE,
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Advice { .. }));
    assert!(err.to_string().contains("unknown band 'Gone'"));
}

#[test]
fn test_urgent_threshold_range() {
    let err = expect_err(EngineDef {
        urgent: Some(UrgentDef {
            trigger: Trigger::Below,
            threshold: 120.0,
            text: "Escalate.",
        }),
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Urgent { .. }));
}

#[test]
fn test_financial_field_references() {
    let err = expect_err(EngineDef {
        financial: Some(FinancialDef {
            investment_field: "alpha",
            benefit_field: "missing",
            ramp_field: "alpha",
            horizon_months: 36,
            conservative: 0.7,
            optimistic: 1.3,
        }),
        ..base_def()
    });
    assert!(matches!(err, ConfigError::Financial { .. }));
    assert!(err.to_string().contains("unknown field 'missing'"));
}

#[test]
fn test_financial_multiplier_ranges() {
    let zero_horizon = expect_err(EngineDef {
        financial: Some(FinancialDef {
            investment_field: "alpha",
            benefit_field: "alpha",
            ramp_field: "alpha",
            horizon_months: 0,
            conservative: 0.7,
            optimistic: 1.3,
        }),
        ..base_def()
    });
    assert!(zero_horizon.to_string().contains("at least one month"));

    let wild_conservative = expect_err(EngineDef {
        financial: Some(FinancialDef {
            investment_field: "alpha",
            benefit_field: "alpha",
            ramp_field: "alpha",
            horizon_months: 36,
            conservative: 1.4,
            optimistic: 1.3,
        }),
        ..base_def()
    });
    assert!(wild_conservative.to_string().contains("outside (0, 1]"));

    let timid_optimistic = expect_err(EngineDef {
        financial: Some(FinancialDef {
            investment_field: "alpha",
            benefit_field: "alpha",
            ramp_field: "alpha",
            horizon_months: 36,
            conservative: 0.7,
            optimistic: 0.9,
        }),
        ..base_def()
    });
    assert!(timid_optimistic.to_string().contains("below 1"));
}

#[test]
fn test_override_unknown_names_rejected() {
    let unknown_dim = EngineOverrides {
        weights: [("beta_dim".to_string(), 1.0)].into_iter().collect(),
        ..EngineOverrides::default()
    };
    let err = build_engine(&base_def(), Some(&unknown_dim)).unwrap_err();
    assert!(matches!(err, ConfigError::Overrides { .. }));

    let unknown_band = EngineOverrides {
        bands: [("Gone".to_string(), 30.0)].into_iter().collect(),
        ..EngineOverrides::default()
    };
    let err = build_engine(&base_def(), Some(&unknown_band)).unwrap_err();
    assert!(err.to_string().contains("unknown band 'Gone'"));

    let no_urgent_rule = EngineOverrides {
        urgent_threshold: Some(10.0),
        ..EngineOverrides::default()
    };
    let err = build_engine(&base_def(), Some(&no_urgent_rule)).unwrap_err();
    assert!(err.to_string().contains("no urgent rule"));
}

#[test]
fn test_overrides_are_validated_like_builtins() {
    // A weight override that breaks the sum fails the same check the
    // builtin tables pass through.
    let broken_sum = EngineOverrides {
        weights: [("alpha_dim".to_string(), 0.4)].into_iter().collect(),
        ..EngineOverrides::default()
    };
    let err = build_engine(&base_def(), Some(&broken_sum)).unwrap_err();
    assert!(matches!(err, ConfigError::Dimensions { .. }));

    let broken_order = EngineOverrides {
        bands: [("High".to_string(), 0.0)].into_iter().collect(),
        ..EngineOverrides::default()
    };
    let err = build_engine(&base_def(), Some(&broken_order)).unwrap_err();
    assert!(matches!(err, ConfigError::Bands { .. }));
}

#[test]
fn test_override_application_moves_values() {
    let overrides = EngineOverrides {
        targets: [("alpha_dim".to_string(), 60.0)].into_iter().collect(),
        bands: [("High".to_string(), 40.0)].into_iter().collect(),
        ..EngineOverrides::default()
    };
    let engine = build_engine(&base_def(), Some(&overrides)).unwrap();
    assert_eq!(engine.dimensions[0].target, 60.0);
    assert_eq!(engine.bands[1].low, 40.0);
}
