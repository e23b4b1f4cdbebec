use minilearn::optimization::*;

use rand::prelude::*;


// f(x) = 1/2 * ||A x - b||^2 with A = diag(1, 2, 4).
const DIAG: [f64; 3] = [1.0, 2.0, 4.0];
const B: [f64; 3] = [1.0, 1.0, 1.0];


fn objective(x: &[f64]) -> f64 {
    x.iter()
        .zip(DIAG.iter().zip(B.iter()))
        .map(|(xi, (a, b))| 0.5 * (a * xi - b).powi(2))
        .sum()
}


fn gradient(x: &[f64], _t: usize) -> Vec<f64> {
    x.iter()
        .zip(DIAG.iter().zip(B.iter()))
        .map(|(xi, (a, b))| a * (a * xi - b))
        .collect()
}


fn minimizer() -> Vec<f64> {
    DIAG.iter().zip(B.iter()).map(|(a, b)| b / a).collect()
}


#[test]
fn gradient_descent_converges() {
    // The largest curvature is 16, so 1/16 is a safe step length.
    let trace = GradientDescent::new(
            gradient, StepLength::Constant(1.0 / 16.0), objective
        )
        .horizon(500)
        .run(&[0.0; 3])
        .unwrap();

    let opt = minimizer();
    trace.model().iter()
        .zip(&opt)
        .for_each(|(x, o)| assert!((x - o).abs() < 1e-6));
    assert!(trace.last_objective_value().unwrap() < 1e-10);
    assert_eq!(500, trace.objective_values().len());
    assert!(trace.elapsed().windows(2).all(|w| w[0] <= w[1]));
}


#[test]
fn averaged_model_is_the_mean_of_iterates() {
    let horizon = 5;
    let init = vec![3.0, -1.0, 0.5];
    let step = StepLength::Quadratic(0.05);

    // Replay the iterates by hand.
    let mut theta = init.clone();
    let mut sum = init.clone();
    for t in 1..=horizon {
        let g = gradient(&theta, t);
        let eta = step.step_length(t);
        theta.iter_mut().zip(g).for_each(|(th, gi)| *th -= eta * gi);
        sum.iter_mut().zip(&theta).for_each(|(s, th)| *s += th);
    }
    let expected = sum.iter()
        .map(|s| s / (horizon + 1) as f64)
        .collect::<Vec<_>>();

    let trace = GradientDescent::new(gradient, step, objective)
        .horizon(horizon)
        .model_averaging(true)
        .run(&init)
        .unwrap();
    trace.model().iter()
        .zip(&expected)
        .for_each(|(x, e)| assert!((x - e).abs() < 1e-12));
}


#[test]
fn projected_gradient_stays_in_the_box() {
    // The unconstrained minimizer (1, 0.5, 0.25) lies outside [0, 0.2]^3.
    let project = |x: Vec<f64>, _t: usize| {
        x.into_iter().map(|xi| xi.clamp(0.0, 0.2)).collect()
    };
    let trace = GradientDescent::new(
            gradient, StepLength::Linear(0.1), objective
        )
        .horizon(50)
        .post_gradient(project)
        .run(&[0.0; 3])
        .unwrap();
    assert!(trace.model().iter().all(|x| (0.0..=0.2).contains(x)));
    assert!((trace.model()[0] - 0.2).abs() < 1e-12);
}


#[test]
fn exact_coordinate_minimization() {
    // Minimizing along coordinate i gives x_i = b_i / a_i.
    let update = |_x: &[f64], i: usize, _it: usize| B[i] / DIAG[i];

    let selector = CoordinateRule::Cyclic
        .selector(3, StdRng::seed_from_u64(8))
        .unwrap();
    let trace = CoordinateMethod::new(update, selector, objective)
        .horizon(3)
        .run(vec![0.0; 3])
        .unwrap();
    // One sweep touches every coordinate once.
    assert_eq!(minimizer(), trace.model());
    assert!(trace.last_objective_value().unwrap().abs() < 1e-12);
}


#[test]
fn random_coordinate_descent_decreases() {
    let update = |x: &[f64], i: usize, _it: usize| {
        let a = DIAG[i];
        x[i] - (a * (a * x[i] - B[i])) / (a * a) * 0.5
    };
    let selector = Uniform::new(3, StdRng::seed_from_u64(10)).unwrap();
    let trace = CoordinateMethod::new(update, selector, objective)
        .horizon(200)
        .run(vec![0.0; 3])
        .unwrap();

    let values = trace.objective_values();
    assert!(values.windows(2).all(|w| w[1] <= w[0]));
    assert!(*values.last().unwrap() < 1e-6);
}


#[test]
fn selector_keeps_state_across_runs() {
    let update = |_x: &[f64], i: usize, _it: usize| i as f64 + 1.0;
    let mut method = CoordinateMethod::new(
        update, Cyclic::new(3).unwrap(), objective
    ).horizon(1);

    // The first run visits coordinate 1, the second visits 2.
    let first = method.run(vec![0.0; 3]).unwrap();
    assert_eq!(&[0.0, 2.0, 0.0], first.model());
    let second = method.run(vec![0.0; 3]).unwrap();
    assert_eq!(&[0.0, 0.0, 3.0], second.model());
}
