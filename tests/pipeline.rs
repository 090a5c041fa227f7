use lusk::dispatch::read_package;
use lusk::packages::sample_packages;

/// The full dispatch -> compute -> format pipeline over the built-in
/// sample packages, checked against the exact expected output lines.
#[test]
fn sample_packages_produce_reference_lines() {
    let expected = [
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; \
         Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; \
         Потрачено ккал: 336.000.",
        "Тип тренировки: Running; Длительность: 1.000 ч.; \
         Дистанция: 9.750 км; Ср. скорость: 9.750 км/ч; \
         Потрачено ккал: 797.805.",
        "Тип тренировки: SportsWalking; Длительность: 1.000 ч.; \
         Дистанция: 5.850 км; Ср. скорость: 5.850 км/ч; \
         Потрачено ккал: 349.252.",
    ];

    let pkgs = sample_packages();
    assert_eq!(pkgs.len(), expected.len());

    for (pkg, want) in pkgs.iter().zip(expected) {
        let workout = read_package(&pkg.code, &pkg.data).unwrap();
        assert_eq!(workout.summary().to_string(), want);
    }
}

#[test]
fn bad_packages_fail_before_any_computation() {
    assert!(read_package("XYZ", &[1.0, 2.0, 3.0]).is_err());
    assert!(read_package("RUN", &[1.0, 2.0]).is_err());
}
