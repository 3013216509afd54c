//! End-to-end use of the data quality helpers: configuration, cuts, yields

use dq_kinematics::{
    accumulate_yields, evcut::Cut, Configuration, Event, EventInfo, Float, RunPeriods, Track, Tracks,
};

const CONFIG: &str = "
    7          min_layers
    25.        max_chi2_per_dof
    12         min_hits
    20000.     min_pz (MeV)
    1e-15      duplicate_tolerance
    .true.     require_colliding
";

fn track(charge: Float, n_layers: i32, pz0: Float) -> Track {
    Track {
        n_layers,
        charge,
        chi2: 10.,
        n_dof: 10,
        x0: 10. * charge,
        y0: -5.,
        px0: 30.,
        py0: 40.,
        pz0,
        p0: (pz0 * pz0 + 2_500.).sqrt(),
        px1: 60.,
        py1: 80.,
        p1: (pz0 * pz0 + 10_000.).sqrt(),
    }
}

fn event(run: u32, event_time: i64, tap: u32, tracks: &[Track]) -> Event {
    let info = EventInfo {
        run,
        event_time,
        tap,
        ..Default::default()
    };
    Event::new(info, tracks.iter().copied().collect::<Tracks>())
}

#[test]
fn yields_of_a_small_run() {
    let config = Configuration::parse(CONFIG).unwrap();
    let mut periods = RunPeriods::new();
    periods.add_stable(9_000, 1_000, 2_000);
    periods.add_stable(9_001, 1_000, 2_000);
    periods.add_excluded(9_001, 1_500, 1_600);
    let event_cut = config.event_cut(periods);

    let events = [
        // Selected, two good tracks and a short one
        event(
            9_000,
            1_100,
            0b100,
            &[
                track(1., 8, 30_000.),
                track(-1., 9, 40_000.),
                track(-1., 4, 50_000.),
            ],
        ),
        // Selected, but the second track is a duplicate
        event(
            9_001,
            1_200,
            0b100,
            &[track(1., 8, 30_000.), track(1., 8, 30_000.)],
        ),
        // Outside of stable running
        event(9_000, 2_500, 0b100, &[track(1., 8, 30_000.)]),
        // Excluded period
        event(9_001, 1_550, 0b100, &[track(1., 8, 30_000.)]),
        // No timing trigger
        event(9_000, 1_300, 0b010, &[track(1., 8, 30_000.)]),
    ];
    let yields = accumulate_yields(&events, &event_cut, &config.track_cut);

    let cutflow = yields.cutflow();
    assert_eq!(cutflow.all, 5);
    assert_eq!(cutflow.passed[Cut::GoodTimes.index()], 4);
    assert_eq!(cutflow.passed[Cut::ExcludedTimes.index()], 3);
    assert_eq!(cutflow.passed[Cut::Colliding.index()], 3);
    assert_eq!(cutflow.selected(), 2);

    let run_9000 = yields.run(9_000).unwrap();
    assert_eq!(run_9000.events, 1);
    assert_eq!(run_9000.tracks.tracks, 3);
    assert_eq!(run_9000.tracks.good, 2);
    assert_eq!(run_9000.tracks.good_positive, 1);
    assert_eq!(run_9000.tracks.good_negative, 1);

    let run_9001 = yields.run(9_001).unwrap();
    assert_eq!(run_9001.events, 1);
    assert_eq!(run_9001.tracks.positive, 2);
    assert_eq!(run_9001.tracks.good, 1);

    assert_eq!(yields.total().tracks.good, 3);
    assert_eq!(yields.runs().keys().copied().collect::<Vec<_>>(), vec![9_000, 9_001]);
}

#[test]
fn derived_track_quantities() {
    let tracks: Tracks = [track(1., 8, 30_000.), track(-1., 8, 120_000.)]
        .into_iter()
        .collect();
    assert_eq!(tracks.pt0(), vec![50., 50.]);
    let eta = tracks.eta0();
    assert!(eta[1] > eta[0]);
    assert!(eta[0] > 7. && eta[0] < 8.);
    assert_eq!(tracks.pz_charge0(), vec![30_000., -120_000.]);
    assert_eq!(tracks.x0_by_charge(), (vec![10.], vec![-10.]));

    // Tracks bend between both states
    let theta_x0 = tracks.theta_x0();
    let theta_x1 = tracks.theta_x1();
    assert!(theta_x1[0] > theta_x0[0]);
    assert!(theta_x1[1] > theta_x0[1]);
}
