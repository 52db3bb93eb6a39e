//! Tests fuzz safe : propriétés du noyau sur entrées générées (proptest).
//!
//! - nombre de cas borné (pas de gel)
//! - opérandes jusqu’à 10^15 avec 0..12 décimales (dépassements inclus)
//! - invariants clés : déterminisme, échelle 10, limite 10^12, arrondi final
//!   à moins d’une demi-unité, lecture de l’affichage brut

use num_bigint::BigInt;
use proptest::prelude::*;

use super::{
    evaluer, formater_brut, formater_final, normaliser, normaliser_avec, Decimal, EtatCalcul,
    ErreurCalcul, ModeArrondi, MotifSaisie, PolitiqueVide, ECHELLE_INTERMEDIAIRE, LIMITE,
};

/* ------------------------ Générateurs ------------------------ */

fn decimal() -> impl Strategy<Value = Decimal> + Clone {
    (-1_000_000_000_000_000i64..=1_000_000_000_000_000, 0u32..=12)
        .prop_map(|(m, e)| Decimal::new(BigInt::from(m), e))
}

/// Petits opérandes : la plupart des calculs restent sous la limite.
fn petit_decimal() -> impl Strategy<Value = Decimal> + Clone {
    (-100_000_000i64..=100_000_000, 0u32..=4).prop_map(|(m, e)| Decimal::new(BigInt::from(m), e))
}

fn operateur() -> impl Strategy<Value = char> + Clone {
    prop::sample::select(vec!['+', '-', '*', '/', '−', '×', '÷'])
}

fn mode() -> impl Strategy<Value = ModeArrondi> {
    prop::sample::select(ModeArrondi::TOUS.to_vec())
}

fn etat(nombre: impl Strategy<Value = Decimal> + Clone) -> impl Strategy<Value = EtatCalcul> {
    (
        prop::array::uniform4(nombre),
        prop::array::uniform3(operateur()),
        mode(),
    )
        .prop_map(|(n, o, m)| EtatCalcul::new(n, o, m))
}

fn demi() -> Decimal {
    Decimal::new(BigInt::from(5), 1)
}

/* ------------------------ Propriétés ------------------------ */

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn fuzz_evaluation_deterministe(e in etat(decimal())) {
        let a = evaluer(&e);
        let b = evaluer(&e.clone());
        prop_assert_eq!(a, b);
    }

    #[test]
    fn fuzz_resultat_borne_a_dix_decimales(e in etat(petit_decimal())) {
        match evaluer(&e) {
            Ok(r) => {
                prop_assert_eq!(r.echelle(), ECHELLE_INTERMEDIAIRE);
                prop_assert!(r.abs() <= Decimal::entier(LIMITE));
            }
            Err(err) => prop_assert!(
                matches!(err, ErreurCalcul::DivisionParZero | ErreurCalcul::Depassement { .. }),
                "erreur inattendue: {err}"
            ),
        }
    }

    #[test]
    fn fuzz_bloc_toujours_en_premier(
        n1 in decimal(),
        n2 in decimal(),
        n4 in decimal(),
        op1 in operateur(),
        op3 in operateur(),
    ) {
        // n2 ÷ 0 échoue quelle que soit la suite
        let zero = Decimal::zero();
        let e = EtatCalcul::new([n1, n2, zero, n4], [op1, '÷', op3], ModeArrondi::Math);
        prop_assert_eq!(evaluer(&e), Err(ErreurCalcul::DivisionParZero));
    }

    #[test]
    fn fuzz_arrondi_final_a_moins_d_une_demi_unite(v in decimal(), m in mode()) {
        let s = formater_final(&v, m);
        let entier = normaliser(&s).unwrap();
        prop_assert_eq!(entier.echelle(), 0);

        let ecart = (&entier - &v).abs();
        match m {
            ModeArrondi::Math | ModeArrondi::Bancaire => prop_assert!(ecart <= demi()),
            // vers zéro : jamais plus loin de zéro que la valeur
            ModeArrondi::Troncature => {
                prop_assert!(entier.abs() <= v.abs());
                prop_assert!(ecart < Decimal::entier(1));
            }
        }
        prop_assert!(s != "-0");
        // même entrée, même sortie
        prop_assert_eq!(formater_final(&v, m), s);
    }

    #[test]
    fn fuzz_affichage_brut_relisible(v in decimal()) {
        let brut = formater_brut(&v);
        prop_assert_eq!(normaliser(&brut).unwrap(), v.clone());
        prop_assert_eq!(normaliser(&brut.replace('.', ",")).unwrap(), v.clone());
        prop_assert_eq!(normaliser(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn fuzz_exposant_refuse(s in "[0-9 ,.]{0,6}[eE][0-9+-]{0,4}") {
        let attendu = matches!(
            normaliser_avec(&s, PolitiqueVide::Zero),
            Err(ErreurCalcul::Saisie { motif: MotifSaisie::Exposant, .. })
        );
        prop_assert!(attendu, "s={:?}", s);
    }

    #[test]
    fn fuzz_saisie_quelconque_sans_panique(s in "[0-9 ,.+-]{0,16}") {
        // accepte ou refuse, mais ne panique jamais ; jamais d’autre erreur que Saisie
        if let Err(err) = normaliser(&s) {
            prop_assert!(matches!(err, ErreurCalcul::Saisie { .. }), "s={:?} err={}", s, err);
        }
    }
}
