use approx::assert_relative_eq;
use strided_matrix::{
    divides, horizontal_concatenate, minus, modulus, multiplies, multiplies_matrix, negate, plus,
    plus_scalar, transpose, vertical_concatenate, ErrorKind, Matrix, MatrixError, Result,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn sample() -> Matrix<i32, 3, 2> {
    Matrix::from_flat([1, 2, 3, 4, 5, 6])
}

#[test]
fn test_flat_construction_is_row_major() {
    let m = sample();
    assert_eq!(m[(0, 0)], 1);
    assert_eq!(m[(0, 1)], 2);
    assert_eq!(m[(1, 0)], 3);
    assert_eq!(m[(2, 1)], 6);
}

#[test]
fn test_checked_access_fails_where_unchecked_does_not() {
    let mut m = Matrix::<i32, 1, 1>::from_value(9);
    let err = m.at(1, 0).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(
        err,
        MatrixError::HeightOutOfRange {
            index: 1,
            height: 1
        }
    );
    assert!(m.at_mut(0, 1).is_err());

    // (1, 0) is outside the 1x1 buffer; the unchecked path is only exercised
    // on an offset that stays inside it.
    let wide = Matrix::<i32, 2, 3>::from_flat([1, 2, 3, 4, 5, 6]);
    assert!(wide.at(0, 3).is_err());
    assert_eq!(wide[(0, 3)], 4);
    assert_eq!(unsafe { *wide.get_unchecked(0, 4) }, 5);

    *m.at_mut(0, 0).unwrap() = 1;
    assert_eq!(m.data(), &[1]);
}

#[test]
fn test_single_element_checked_and_unchecked_access() {
    let m = Matrix::<i32, 1, 1>::from_value(3);
    assert_eq!(m.at(1, 0).unwrap_err().kind(), ErrorKind::OutOfRange);
    assert_eq!(m[(0, 0)], 3);
    assert_eq!(unsafe { *m.get_unchecked(0, 0) }, 3);
}

#[test]
#[should_panic]
fn test_offset_indexing_past_the_buffer_panics() {
    let m = Matrix::<i32, 1, 1>::from_value(3);
    let _ = m[(1, 0)];
}

#[test]
fn test_horizontal_concatenate_scenario() {
    init_logging();
    let m = sample();
    let joined: Matrix<i32, 3, 4> = horizontal_concatenate(&m, &m);
    assert_eq!(joined.row(0).unwrap(), &[1, 2, 1, 2]);
    assert_eq!(joined.row(1).unwrap(), &[3, 4, 3, 4]);
    assert_eq!(joined.row(2).unwrap(), &[5, 6, 5, 6]);
}

#[test]
fn test_vertical_concatenate_then_sub_matrix_round_trip() {
    init_logging();
    let top = sample();
    let bottom = Matrix::<i32, 2, 2>::from_flat([7, 8, 9, 10]);
    let stacked: Matrix<i32, 5, 2> = vertical_concatenate(&top, &bottom);
    assert_eq!(stacked.data(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10]);
    assert_eq!(stacked.sub_matrix::<0, 0, 3, 2>().unwrap(), top);
    assert_eq!(stacked.sub_matrix::<3, 0, 2, 2>().unwrap(), bottom);
}

#[test]
fn test_sub_matrix_out_of_range() {
    let m = sample();
    let err = m.sub_matrix::<1, 1, 3, 1>().unwrap_err();
    assert_eq!(
        err,
        MatrixError::SubMatrixOutOfRange {
            start_height: 1,
            start_width: 1,
            sub_height: 3,
            sub_width: 1,
            height: 3,
            width: 2,
        }
    );
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn test_row_broadcast_scenario() {
    init_logging();
    let row = Matrix::<i32, 1, 2>::from_flat([1, 2]);
    let result: Matrix<i32, 3, 2> = plus(&sample(), &row).unwrap();
    assert_eq!(result.data(), &[2, 4, 4, 6, 6, 8]);
}

#[test]
fn test_all_broadcast_operations_with_column() {
    let m = Matrix::<i32, 2, 3>::from_flat([10, 11, 12, 20, 21, 22]);
    let column = Matrix::<i32, 2, 1>::from_flat([3, 4]);

    let sum: Matrix<i32, 2, 3> = plus(&m, &column).unwrap();
    let difference: Matrix<i32, 2, 3> = minus(&m, &column).unwrap();
    let product: Matrix<i32, 2, 3> = multiplies(&m, &column).unwrap();
    let quotient: Matrix<i32, 2, 3> = divides(&m, &column).unwrap();
    let remainder: Matrix<i32, 2, 3> = modulus(&m, &column).unwrap();

    assert_eq!(sum.data(), &[13, 14, 15, 24, 25, 26]);
    assert_eq!(difference.data(), &[7, 8, 9, 16, 17, 18]);
    assert_eq!(product.data(), &[30, 33, 36, 80, 84, 88]);
    assert_eq!(quotient.data(), &[3, 3, 4, 5, 5, 5]);
    assert_eq!(remainder.data(), &[1, 2, 0, 0, 1, 2]);
}

#[test]
fn test_incompatible_shapes_are_invalid_arguments() {
    let a = Matrix::<f64, 3, 2>::zeros();
    let b = Matrix::<f64, 2, 2>::zeros();
    let result: Result<Matrix<f64, 3, 2>> = plus(&a, &b);
    assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidArgument);

    let c = Matrix::<f64, 2, 3>::zeros();
    let result: Result<Matrix<f64, 2, 3>> = minus(&c, &b);
    assert!(result.is_err());
}

#[test]
fn test_outer_product_through_broadcast_and_matmul_agree() {
    let column = Matrix::<f64, 3, 1>::from_flat([1.0, 2.0, 3.0]);
    let row = Matrix::<f64, 1, 4>::from_flat([0.5, 1.5, -2.0, 4.0]);
    let broadcast: Matrix<f64, 3, 4> = multiplies(&column, &row).unwrap();
    let product = multiplies_matrix(&column, &row);
    assert_eq!(broadcast, product);
}

#[test]
fn test_matrix_product() {
    init_logging();
    let a = Matrix::<f64, 2, 3>::from_flat([1.0, 0.5, -1.0, 2.0, 3.0, 0.0]);
    let b = Matrix::<f64, 3, 2>::from_flat([4.0, 1.0, 2.0, -2.0, 1.0, 3.0]);
    let c = a.multiplies_matrix(&b);
    let expected = [4.0, -3.0, 14.0, -4.0];
    for (value, expected) in c.data().iter().zip(expected) {
        assert_relative_eq!(*value, expected, epsilon = 1e-12);
    }
}

#[test]
fn test_operators_chain_like_named_methods() {
    let a = Matrix::<f64, 2, 2>::from_flat([1.0, 2.0, 3.0, 4.0]);
    let b = Matrix::<f64, 2, 2>::from_flat([0.5, 0.5, 2.0, 2.0]);

    let by_operator = -((a + b) * 2.0 - &a) / b;

    let mut by_method = a;
    by_method.plus(&b).multiplies_scalar(2.0).minus(&a).negate().divides(&b);
    assert_eq!(by_operator, by_method);

    assert_eq!(plus_scalar(&a, 1.0), a + 1.0);
    assert_eq!(negate(&a), -a);
}

#[test]
fn test_transpose_of_row_is_column() {
    let row = Matrix::<i32, 1, 4>::from_flat([1, 2, 3, 4]);
    let column = transpose(&row);
    assert_eq!(column.shape(), (4, 1));
    assert_eq!(column.column(0).unwrap().to_vec(), vec![1, 2, 3, 4]);
}

#[test]
fn test_fill_and_sort_columns_through_views() {
    let mut m = Matrix::<i32, 3, 3>::from_flat([9, 1, 5, 3, 8, 4, 6, 2, 7]);
    m.sort_columns();
    assert_eq!(m.data(), &[3, 1, 4, 6, 2, 5, 9, 8, 7]);

    m.fill_column(1, 0).unwrap();
    assert_eq!(m.column(1).unwrap().to_vec(), vec![0, 0, 0]);
    assert_eq!(m.row(2).unwrap(), &[9, 0, 7]);
}

#[cfg(feature = "random")]
#[test]
fn test_uniform_random_fills_generators() {
    use strided_matrix::UniformRandom;

    let mut random = UniformRandom::with_seed(-1.0, 1.0, 2024).unwrap();
    let mut m = Matrix::<f64, 5, 4>::zeros();
    m.fill_generator(|| random.generate());
    m.fill_row_generator(0, || random.generate()).unwrap();
    m.fill_column_generator(3, || random.generate()).unwrap();
    assert!(m.data().iter().all(|&x| (-1.0..1.0).contains(&x)));

    let mut replay = UniformRandom::with_seed(-1.0, 1.0, 2024).unwrap();
    let mut same = Matrix::<f64, 5, 4>::zeros();
    same.fill_generator(|| replay.generate());
    same.fill_row_generator(0, || replay.generate()).unwrap();
    same.fill_column_generator(3, || replay.generate()).unwrap();
    assert_eq!(m, same);
}
