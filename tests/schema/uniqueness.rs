use entity::sea_orm_active_enums::Rol;
use maskngo::{
    data::configuracion::ConfiguracionRepository,
    error::{constraint::ConstraintError, Error},
};
use maskngo_test_utils::prelude::*;
use rust_decimal_macros::dec;

/// Expect the seeded `PENALIZACION_DIA` key to refuse a second row
#[tokio::test]
async fn rejects_duplicate_config_key() -> Result<(), TestError> {
    let test = test_setup_with_schema!()?;

    let config_repo = ConfiguracionRepository::new(&test.state.db);
    let result = config_repo
        .create("PENALIZACION_DIA", "75.00", None)
        .await;

    let err = Error::from(result.unwrap_err());
    assert!(matches!(
        err,
        Error::ConstraintError(ConstraintError::Unique(_))
    ));
    assert_eq!(
        config_repo.get_value("PENALIZACION_DIA").await?.as_deref(),
        Some("50.00")
    );

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_usuario() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

    let result = test.shop().insert_mock_usuario("jperez", Rol::Admin).await;

    assert!(matches!(result, Err(TestError::DbErr(_))));

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_folio() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (cliente, usuario, _, venta, _) = test
        .shop()
        .insert_mock_venta_with_detalle("VEN-20250121-0001")
        .await?;

    let result = test
        .shop()
        .insert_mock_venta(
            cliente.id_cliente,
            usuario.id_usuario,
            &venta.folio,
            dec!(100.00),
        )
        .await;

    match result {
        Err(TestError::DbErr(err)) => assert!(matches!(
            Error::from(err),
            Error::ConstraintError(ConstraintError::Unique(_))
        )),
        other => panic!("expected a unique violation, got {:?}", other),
    }

    Ok(())
}

#[tokio::test]
async fn rejects_duplicate_codigo_barras() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    test.shop().insert_mock_disfraz("DISNEY0000", 5, 0).await?;

    let result = test.shop().insert_mock_disfraz("DISNEY0000", 1, 1).await;

    assert!(result.is_err());

    Ok(())
}
