use chrono::{Duration, Utc};
use entity::sea_orm_active_enums::Rol;
use maskngo::error::{constraint::ConstraintError, Error};
use maskngo_test_utils::prelude::*;
use rust_decimal::Decimal;
use sea_orm::{ActiveModelTrait, ActiveValue, EntityTrait};

fn renta(id_cliente: i32, id_usuario: i32) -> entity::rentas::ActiveModel {
    let fecha_devolucion = Utc::now().naive_utc() + Duration::days(3);

    entity::rentas::ActiveModel {
        id_cliente: ActiveValue::Set(id_cliente),
        id_usuario: ActiveValue::Set(id_usuario),
        fecha_devolucion: ActiveValue::Set(fecha_devolucion),
        dias_renta: ActiveValue::Set(3),
        total: ActiveValue::Set(Decimal::ZERO),
        ..Default::default()
    }
}

fn venta(id_cliente: i32, usuario_id: i32) -> entity::ventas::ActiveModel {
    entity::ventas::ActiveModel {
        folio: ActiveValue::Set("VEN-20250121-0001".to_string()),
        id_cliente: ActiveValue::Set(id_cliente),
        usuario_id: ActiveValue::Set(usuario_id),
        total: ActiveValue::Set(Decimal::ZERO),
        ..Default::default()
    }
}

/// Expect a foreign key violation for a rental of a customer that does not exist
#[tokio::test]
async fn rejects_renta_for_nonexistent_cliente() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

    let result = renta(42, usuario.id_usuario).insert(&test.state.db).await;

    let err = Error::from(result.unwrap_err());
    assert!(matches!(
        err,
        Error::ConstraintError(ConstraintError::ForeignKey(_))
    ));

    Ok(())
}

/// Expect a foreign key violation for a rental by a user that does not exist
#[tokio::test]
async fn rejects_renta_for_nonexistent_usuario() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let cliente = test.shop().insert_mock_cliente("6181234567").await?;

    let result = renta(cliente.id_cliente, 42).insert(&test.state.db).await;

    assert!(result.is_err());
    assert!(entity::prelude::Rentas::find()
        .all(&test.state.db)
        .await?
        .is_empty());

    Ok(())
}

#[tokio::test]
async fn rejects_venta_for_nonexistent_cliente() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let usuario = test.shop().insert_mock_usuario("jperez", Rol::Empleado).await?;

    let result = venta(42, usuario.id_usuario).insert(&test.state.db).await;

    let err = Error::from(result.unwrap_err());
    assert!(matches!(
        err,
        Error::ConstraintError(ConstraintError::ForeignKey(_))
    ));

    Ok(())
}

#[tokio::test]
async fn rejects_venta_for_nonexistent_usuario() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let cliente = test.shop().insert_mock_cliente("6181234567").await?;

    let result = venta(cliente.id_cliente, 42).insert(&test.state.db).await;

    assert!(result.is_err());

    Ok(())
}

/// Expect a customer referenced by a rental to survive a delete attempt
#[tokio::test]
async fn restricts_deleting_referenced_cliente() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (cliente, usuario, _, _, _) = test.shop().insert_mock_renta_with_detalle().await?;

    let delete_cliente = entity::prelude::Clientes::delete_by_id(cliente.id_cliente)
        .exec(&test.state.db)
        .await;
    let delete_usuario = entity::prelude::Usuarios::delete_by_id(usuario.id_usuario)
        .exec(&test.state.db)
        .await;

    assert!(delete_cliente.is_err());
    assert!(delete_usuario.is_err());
    assert!(entity::prelude::Clientes::find_by_id(cliente.id_cliente)
        .one(&test.state.db)
        .await?
        .is_some());

    Ok(())
}

/// Expect a costume used by a sale line to survive a delete attempt
#[tokio::test]
async fn restricts_deleting_referenced_inventario() -> Result<(), TestError> {
    let mut test = test_setup_with_schema!()?;
    let (_, _, disfraz, _, _) = test
        .shop()
        .insert_mock_venta_with_detalle("VEN-20250121-0001")
        .await?;

    let result = entity::prelude::Inventario::delete_by_id(disfraz.codigo_barras.clone())
        .exec(&test.state.db)
        .await;

    assert!(result.is_err());

    Ok(())
}
