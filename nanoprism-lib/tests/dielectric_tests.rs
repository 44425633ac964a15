use approx::assert_relative_eq;
use nanoprism::{
    DrudeParameters, MaterialModel, Metal, NanoprismError, OpticalConstantTable, RangePolicy,
    bulk_permittivity, photon_energy, size_corrected_permittivity,
};
use nanoprism::nanoprism_data::OpticalConstantRecord;

#[test]
fn test_photon_energy_conversion() {
    assert_relative_eq!(photon_energy(1239.8), 1.0);
    assert_relative_eq!(photon_energy(413.266_666_666_666_7), 3.0, max_relative = 1e-12);
}

#[test]
fn test_bulk_silver_at_tabulated_energy() {
    // 3.00 eV is a Johnson & Christy sample: n = 0.05, k = 2.275
    let eps = Metal::Silver.permittivity(1239.8 / 3.0).unwrap();
    assert_relative_eq!(eps.re, 0.05 * 0.05 - 2.275 * 2.275, max_relative = 1e-9);
    assert_relative_eq!(eps.im, 2.0 * 0.05 * 2.275, max_relative = 1e-9);
}

#[test]
fn test_bulk_gold_is_metallic_in_the_visible() {
    for wl in [500.0, 600.0, 700.0, 800.0] {
        let eps = Metal::Gold.permittivity(wl).unwrap();
        assert!(eps.re < 0.0, "Re(eps) for Au at {wl} nm = {}", eps.re);
        assert!(eps.im > 0.0, "Im(eps) for Au at {wl} nm = {}", eps.im);
    }
    // real part grows more negative towards the infrared
    let e600 = Metal::Gold.permittivity(600.0).unwrap();
    let e800 = Metal::Gold.permittivity(800.0).unwrap();
    assert!(e800.re < e600.re);
}

#[test]
fn test_size_correction_reference_values() {
    let d = nanoprism::effective_diameter(50.0, 20.0);
    let eps = Metal::Silver.size_corrected_permittivity(400.0, d).unwrap();
    assert_relative_eq!(eps.re, -4.408_414_209_322_566, max_relative = 1e-6);
    assert_relative_eq!(eps.im, 0.578_633_255_871_019, max_relative = 1e-6);

    let eps = Metal::Gold.size_corrected_permittivity(500.0, d).unwrap();
    assert_relative_eq!(eps.re, -2.467_230_397_066_952, max_relative = 1e-6);
    assert_relative_eq!(eps.im, 3.482_666_677_146_839, max_relative = 1e-6);
}

#[test]
fn test_size_correction_vanishes_for_large_particles() {
    for metal in Metal::ALL {
        let bulk = metal.permittivity(550.0).unwrap();
        let huge = metal.size_corrected_permittivity(550.0, 1.0e12).unwrap();
        assert_relative_eq!(bulk.re, huge.re, max_relative = 1e-9);
        assert_relative_eq!(bulk.im, huge.im, max_relative = 1e-9);
    }
}

#[test]
fn test_smaller_particles_are_more_damped() {
    let bulk = Metal::Silver.permittivity(500.0).unwrap();
    let d40 = Metal::Silver.size_corrected_permittivity(500.0, 40.0).unwrap();
    let d10 = Metal::Silver.size_corrected_permittivity(500.0, 10.0).unwrap();
    assert!(d10.im > d40.im && d40.im > bulk.im);
    assert_relative_eq!(d10.im, 2.704_635_644_227_731, max_relative = 1e-6);
    assert_relative_eq!(d40.im, 0.930_410_401_933_087_3, max_relative = 1e-6);
}

#[test]
fn test_materials_do_not_cross_contaminate() {
    let ag = Metal::Silver.size_corrected_permittivity(500.0, 30.0).unwrap();
    let au = Metal::Gold.size_corrected_permittivity(500.0, 30.0).unwrap();
    assert!((ag - au).norm() > 1.0, "Ag {ag} vs Au {au}");

    // repeated evaluation is unaffected by the other material
    let ag_again = Metal::Silver.size_corrected_permittivity(500.0, 30.0).unwrap();
    assert_eq!(ag, ag_again);
}

#[test]
fn test_model_keeps_table_and_constants_together() {
    let silver = Metal::Silver.model();
    assert!(std::ptr::eq(silver.table(), OpticalConstantTable::silver()));
    assert_eq!(*silver.drude(), DrudeParameters::SILVER);

    let gold = Metal::Gold.model();
    assert!(std::ptr::eq(gold.table(), OpticalConstantTable::gold()));
    assert_eq!(*gold.drude(), DrudeParameters::GOLD);

    // an embedded table never runs with another metal's constants
    let err = MaterialModel::new(OpticalConstantTable::silver(), DrudeParameters::GOLD).unwrap_err();
    assert!(matches!(
        err,
        NanoprismError::MismatchedMaterial { metal: Metal::Silver, .. }
    ));
    assert!(MaterialModel::new(OpticalConstantTable::gold(), DrudeParameters::SILVER).is_err());

    let explicit = MaterialModel::new(OpticalConstantTable::silver(), DrudeParameters::SILVER).unwrap();
    assert_eq!(
        size_corrected_permittivity(&explicit, 500.0, 30.0).unwrap(),
        size_corrected_permittivity(&silver, 500.0, 30.0).unwrap()
    );
}

#[test]
fn test_custom_table_accepts_any_constants() {
    let records: Vec<OpticalConstantRecord> = (0..8)
        .map(|i| {
            let energy = 1.0 + 0.5 * i as f64;
            OpticalConstantRecord::new(energy, 0.2 * energy, 4.0 / energy)
        })
        .collect();
    let table = OpticalConstantTable::new("synthetic", &records).unwrap();
    let model = MaterialModel::new(&table, DrudeParameters::GOLD).unwrap();

    // (n, k) at the 2.0 eV knot is (0.4, 2.0)
    let eps = bulk_permittivity(&model, 1239.8 / 2.0).unwrap();
    assert_relative_eq!(eps.re, 0.16 - 4.0, max_relative = 1e-9);
    assert_relative_eq!(eps.im, 1.6, max_relative = 1e-9);
}

#[test]
fn test_out_of_range_policy() {
    // 150 nm is 8.27 eV, above the 6.60 eV end of the silver table
    let extrapolating = Metal::Silver.model();
    assert_eq!(extrapolating.range_policy(), RangePolicy::Extrapolate);
    assert!(bulk_permittivity(&extrapolating, 150.0).is_ok());

    let strict = Metal::Silver.model().with_range_policy(RangePolicy::Reject);
    let err = bulk_permittivity(&strict, 150.0).unwrap_err();
    assert!(matches!(err, NanoprismError::EnergyOutOfRange { max, .. } if max == 6.60));
    assert!(size_corrected_permittivity(&strict, 150.0, 30.0).is_err());

    // inside the table both policies agree
    assert_eq!(
        bulk_permittivity(&strict, 450.0).unwrap(),
        bulk_permittivity(&extrapolating, 450.0).unwrap()
    );
}

#[test]
fn test_invalid_inputs() {
    for wl in [0.0, -400.0, f64::NAN, f64::INFINITY] {
        let err = Metal::Gold.permittivity(wl).unwrap_err();
        assert!(matches!(err, NanoprismError::InvalidWavelength(_)));
    }
    let err = Metal::Gold.size_corrected_permittivity(500.0, 0.0).unwrap_err();
    assert!(matches!(err, NanoprismError::InvalidGeometry(_)));
}
